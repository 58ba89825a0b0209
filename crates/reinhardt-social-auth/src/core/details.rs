//! Access tokens and normalized profile data

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::core::SocialAuthError;

/// Access token returned by a provider's token endpoint
///
/// Held only for the duration of a single flow. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
	/// Wraps a raw token value
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	/// Returns the raw token value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper and returns the raw token value
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl fmt::Debug for AccessToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("AccessToken(***)")
	}
}

/// Parsed user data response, as an associative field mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProviderUserData(Map<String, Value>);

impl ProviderUserData {
	/// Wraps an already-parsed JSON object
	pub fn new(fields: Map<String, Value>) -> Self {
		Self(fields)
	}

	/// Parses a JSON document whose root must be an object
	pub fn from_json(body: &str) -> Result<Self, SocialAuthError> {
		Self::from_value(serde_json::from_str(body)?)
	}

	/// Converts a JSON value whose root must be an object
	pub fn from_value(value: Value) -> Result<Self, SocialAuthError> {
		match value {
			Value::Object(fields) => Ok(Self(fields)),
			other => Err(SocialAuthError::InvalidResponse(format!(
				"expected a JSON object, got {}",
				json_kind(&other)
			))),
		}
	}

	/// Returns the raw value for `key`, treating `null` as absent
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key).filter(|value| !value.is_null())
	}

	/// Returns the value for `key` as a string
	///
	/// Numbers and booleans are rendered with their JSON representation so that
	/// numeric ids (GitHub, Instagram) read the same as string ids.
	pub fn get_str(&self, key: &str) -> Option<String> {
		match self.get(key)? {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			Value::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}

	/// Returns the nested object stored under `key`
	pub fn get_object(&self, key: &str) -> Option<ProviderUserData> {
		match self.get(key)? {
			Value::Object(fields) => Some(Self(fields.clone())),
			_ => None,
		}
	}

	/// Returns the underlying field mapping
	pub fn fields(&self) -> &Map<String, Value> {
		&self.0
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Normalized user profile produced by a successful flow
///
/// Only [`OAuthFlow`](crate::flow::OAuthFlow) constructs this type, after both
/// the token exchange and the profile fetch succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUserDetails {
	access_token: AccessToken,
	user_id: Option<String>,
	nickname: Option<String>,
	first_name: Option<String>,
	last_name: Option<String>,
	email: Option<String>,
	image_url: Option<String>,
	#[serde(skip)]
	raw: ProviderUserData,
}

/// Normalized profile fields read by a provider's accessors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ProfileFields {
	pub(crate) user_id: Option<String>,
	pub(crate) nickname: Option<String>,
	pub(crate) first_name: Option<String>,
	pub(crate) last_name: Option<String>,
	pub(crate) email: Option<String>,
	pub(crate) image_url: Option<String>,
}

impl ProviderUserDetails {
	pub(crate) fn new(access_token: AccessToken, fields: ProfileFields, raw: ProviderUserData) -> Self {
		Self {
			access_token,
			user_id: fields.user_id,
			nickname: fields.nickname,
			first_name: fields.first_name,
			last_name: fields.last_name,
			email: fields.email,
			image_url: fields.image_url,
			raw,
		}
	}

	/// Access token obtained during the flow
	pub fn access_token(&self) -> &AccessToken {
		&self.access_token
	}

	/// Provider-side user id
	pub fn user_id(&self) -> Option<&str> {
		self.user_id.as_deref()
	}

	/// Nickname or login name
	pub fn nickname(&self) -> Option<&str> {
		self.nickname.as_deref()
	}

	/// First name
	pub fn first_name(&self) -> Option<&str> {
		self.first_name.as_deref()
	}

	/// Last name
	pub fn last_name(&self) -> Option<&str> {
		self.last_name.as_deref()
	}

	/// Email address
	pub fn email(&self) -> Option<&str> {
		self.email.as_deref()
	}

	/// Profile image URL
	pub fn image_url(&self) -> Option<&str> {
		self.image_url.as_deref()
	}

	/// The untouched provider response, for provider-specific fields
	pub fn raw(&self) -> &ProviderUserData {
		&self.raw
	}
}
