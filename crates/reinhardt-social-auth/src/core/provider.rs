//! OAuth2 provider trait

use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::core::{AccessToken, ProviderUserData, SocialAuthError};

/// Outbound request a provider may attach headers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStage {
	/// `POST` to the token endpoint
	AccessToken,
	/// `GET` to the user data endpoint
	UserDetails,
}

/// Capability set every OAuth2 provider implements
///
/// The generic flow in [`OAuthFlow`](crate::flow::OAuthFlow) drives the
/// exchange; a provider only supplies its endpoints, its two response parsers
/// and six accessors reading the parsed profile. Accessors return `None` for
/// fields the provider did not send.
///
/// # Example
///
/// ```rust
/// use reinhardt_social_auth::core::{
/// 	AccessToken, OAuthProvider, ProviderUserData, SocialAuthError, parse_json_token_response,
/// };
///
/// struct Example;
///
/// impl OAuthProvider for Example {
/// 	fn authorize_endpoint(&self) -> &str { "https://example.com/oauth/authorize" }
/// 	fn token_endpoint(&self) -> &str { "https://example.com/oauth/token" }
/// 	fn user_data_endpoint(&self) -> &str { "https://api.example.com/me" }
///
/// 	fn parse_token_response(&self, body: &str) -> Result<AccessToken, SocialAuthError> {
/// 		parse_json_token_response(body)
/// 	}
/// 	fn parse_user_data_response(&self, body: &str) -> Result<ProviderUserData, SocialAuthError> {
/// 		ProviderUserData::from_json(body)
/// 	}
///
/// 	fn user_id(&self, data: &ProviderUserData) -> Option<String> { data.get_str("id") }
/// 	fn nickname(&self, data: &ProviderUserData) -> Option<String> { data.get_str("login") }
/// 	fn first_name(&self, _: &ProviderUserData) -> Option<String> { None }
/// 	fn last_name(&self, _: &ProviderUserData) -> Option<String> { None }
/// 	fn email(&self, data: &ProviderUserData) -> Option<String> { data.get_str("email") }
/// 	fn image_url(&self, _: &ProviderUserData) -> Option<String> { None }
/// }
/// ```
pub trait OAuthProvider: Send + Sync {
	/// Provider key used in logs and identity records
	fn name(&self) -> &str {
		"custom"
	}

	/// Authorization endpoint the user is redirected to
	fn authorize_endpoint(&self) -> &str;

	/// Token endpoint the authorization code is exchanged at
	fn token_endpoint(&self) -> &str;

	/// Endpoint returning the authenticated user's profile
	fn user_data_endpoint(&self) -> &str;

	/// Scopes always requested, placed before the configured ones
	fn default_scopes(&self) -> Vec<String> {
		Vec::new()
	}

	/// Separator used to join scopes in the authorize URL
	fn scope_separator(&self) -> &str {
		","
	}

	/// Query parameter carrying the access token on the profile request
	fn access_token_param(&self) -> &str {
		"access_token"
	}

	/// Extra headers for the given outbound request
	fn headers(&self, _stage: RequestStage) -> HeaderMap {
		HeaderMap::new()
	}

	/// Extracts the access token from a successful token response body
	fn parse_token_response(&self, body: &str) -> Result<AccessToken, SocialAuthError>;

	/// Parses a successful user data response body
	fn parse_user_data_response(&self, body: &str) -> Result<ProviderUserData, SocialAuthError>;

	/// Provider-side user id
	fn user_id(&self, data: &ProviderUserData) -> Option<String>;

	/// Nickname or login name
	fn nickname(&self, data: &ProviderUserData) -> Option<String>;

	/// First name
	fn first_name(&self, data: &ProviderUserData) -> Option<String>;

	/// Last name
	fn last_name(&self, data: &ProviderUserData) -> Option<String>;

	/// Email address
	fn email(&self, data: &ProviderUserData) -> Option<String>;

	/// Profile image URL
	fn image_url(&self, data: &ProviderUserData) -> Option<String>;
}

#[derive(Deserialize)]
struct JsonTokenResponse {
	access_token: Option<String>,
}

/// Parses a JSON token response
///
/// An unparsable body, or one without a non-empty `access_token`, yields
/// [`SocialAuthError::InvalidAuthorizationCode`] carrying the body.
pub fn parse_json_token_response(body: &str) -> Result<AccessToken, SocialAuthError> {
	serde_json::from_str::<JsonTokenResponse>(body)
		.ok()
		.and_then(|response| response.access_token)
		.filter(|token| !token.is_empty())
		.map(AccessToken::new)
		.ok_or_else(|| SocialAuthError::InvalidAuthorizationCode(Some(body.to_string())))
}

/// Splits a display name into first name and the remainder
pub(crate) fn split_full_name(name: Option<String>) -> (Option<String>, Option<String>) {
	let Some(name) = name else {
		return (None, None);
	};
	let mut parts = name.trim().splitn(2, char::is_whitespace);
	let first = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
	let last = parts
		.next()
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_string);
	(first, last)
}
