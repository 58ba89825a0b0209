//! Provider configuration types

use serde::{Deserialize, Serialize};

/// Provider configuration
///
/// Supplied once when a provider flow is built and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// OAuth2 client ID
	pub client_id: String,

	/// OAuth2 client secret
	pub client_secret: String,

	/// Redirect URI registered with the provider
	pub redirect_uri: String,

	/// Scopes requested in addition to the provider's defaults
	#[serde(default)]
	pub scopes: Vec<String>,

	/// Endpoint overrides (mock servers, self-hosted deployments)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub oauth2: Option<OAuth2Config>,
}

/// OAuth2 endpoint set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2Config {
	/// Authorization endpoint URL
	pub authorization_endpoint: String,

	/// Token endpoint URL
	pub token_endpoint: String,

	/// User data endpoint URL
	pub userinfo_endpoint: String,
}

impl OAuth2Config {
	/// Creates an endpoint set from its three URLs
	pub fn new(
		authorization_endpoint: impl Into<String>,
		token_endpoint: impl Into<String>,
		userinfo_endpoint: impl Into<String>,
	) -> Self {
		Self {
			authorization_endpoint: authorization_endpoint.into(),
			token_endpoint: token_endpoint.into(),
			userinfo_endpoint: userinfo_endpoint.into(),
		}
	}
}

impl ProviderConfig {
	/// Creates a configuration without extra scopes or endpoint overrides
	pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
		Self {
			client_id,
			client_secret,
			redirect_uri,
			scopes: Vec::new(),
			oauth2: None,
		}
	}

	/// Requests additional scopes
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = scopes.into_iter().map(Into::into).collect();
		self
	}

	/// Overrides the provider's built-in endpoints
	pub fn with_endpoints(mut self, endpoints: OAuth2Config) -> Self {
		self.oauth2 = Some(endpoints);
		self
	}

	/// Returns an error message when a required field is blank
	pub(crate) fn validate(&self) -> Result<(), String> {
		let required = [
			("client_id", &self.client_id),
			("client_secret", &self.client_secret),
			("redirect_uri", &self.redirect_uri),
		];
		for (field, value) in required {
			if value.trim().is_empty() {
				return Err(format!("{} must not be empty", field));
			}
		}
		Ok(())
	}
}
