//! Facebook OAuth2 provider

use std::collections::HashMap;

use crate::core::{
	AccessToken, OAuth2Config, OAuthProvider, ProviderUserData, SocialAuthError,
	parse_json_token_response,
};

/// Facebook OAuth2 provider
///
/// Older Graph API versions answer the token request with a form-encoded body
/// (`access_token=...&expires=...`); both formats are accepted.
pub struct FacebookProvider {
	endpoints: OAuth2Config,
}

impl FacebookProvider {
	/// Creates a provider using the Graph API endpoints
	pub fn new() -> Self {
		Self::with_endpoints(Self::default_endpoints())
	}

	/// Creates a provider against custom endpoints
	pub fn with_endpoints(endpoints: OAuth2Config) -> Self {
		Self { endpoints }
	}

	/// The Graph API endpoints
	pub fn default_endpoints() -> OAuth2Config {
		OAuth2Config::new(
			"https://www.facebook.com/dialog/oauth",
			"https://graph.facebook.com/oauth/access_token",
			"https://graph.facebook.com/me?fields=id,name,username,first_name,last_name,email",
		)
	}
}

impl Default for FacebookProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl OAuthProvider for FacebookProvider {
	fn name(&self) -> &str {
		"facebook"
	}

	fn authorize_endpoint(&self) -> &str {
		&self.endpoints.authorization_endpoint
	}

	fn token_endpoint(&self) -> &str {
		&self.endpoints.token_endpoint
	}

	fn user_data_endpoint(&self) -> &str {
		&self.endpoints.userinfo_endpoint
	}

	fn default_scopes(&self) -> Vec<String> {
		vec!["email".to_string()]
	}

	fn parse_token_response(&self, body: &str) -> Result<AccessToken, SocialAuthError> {
		if body.trim_start().starts_with('{') {
			return parse_json_token_response(body);
		}

		serde_urlencoded::from_str::<HashMap<String, String>>(body)
			.ok()
			.and_then(|mut params| params.remove("access_token"))
			.filter(|token| !token.is_empty())
			.map(AccessToken::new)
			.ok_or_else(|| SocialAuthError::InvalidAuthorizationCode(Some(body.to_string())))
	}

	fn parse_user_data_response(&self, body: &str) -> Result<ProviderUserData, SocialAuthError> {
		ProviderUserData::from_json(body)
	}

	fn user_id(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("id")
	}

	fn nickname(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("username")
	}

	fn first_name(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("first_name")
	}

	fn last_name(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("last_name")
	}

	fn email(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("email")
	}

	fn image_url(&self, data: &ProviderUserData) -> Option<String> {
		self.user_id(data)
			.map(|id| format!("https://graph.facebook.com/{}/picture", id))
	}
}
