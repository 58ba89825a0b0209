//! Google OAuth2 provider

use crate::core::{
	AccessToken, OAuth2Config, OAuthProvider, ProviderUserData, SocialAuthError,
	parse_json_token_response,
};

/// Google OAuth2 provider
///
/// Google expects space-separated scopes and has no nickname concept; the
/// email address stands in for it.
pub struct GoogleProvider {
	endpoints: OAuth2Config,
}

impl GoogleProvider {
	/// Creates a provider using Google's public endpoints
	pub fn new() -> Self {
		Self::with_endpoints(Self::default_endpoints())
	}

	/// Creates a provider against custom endpoints
	pub fn with_endpoints(endpoints: OAuth2Config) -> Self {
		Self { endpoints }
	}

	/// Google's public endpoints
	pub fn default_endpoints() -> OAuth2Config {
		OAuth2Config::new(
			"https://accounts.google.com/o/oauth2/auth",
			"https://accounts.google.com/o/oauth2/token",
			"https://www.googleapis.com/oauth2/v1/userinfo",
		)
	}
}

impl Default for GoogleProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl OAuthProvider for GoogleProvider {
	fn name(&self) -> &str {
		"google"
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
		vec!["profile".to_string(), "email".to_string()]
	}

	fn scope_separator(&self) -> &str {
		" "
	}

	fn parse_token_response(&self, body: &str) -> Result<AccessToken, SocialAuthError> {
		parse_json_token_response(body)
	}

	fn parse_user_data_response(&self, body: &str) -> Result<ProviderUserData, SocialAuthError> {
		ProviderUserData::from_json(body)
	}

	fn user_id(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("id")
	}

	fn nickname(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("email")
	}

	fn first_name(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("given_name")
	}

	fn last_name(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("family_name")
	}

	fn email(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("email")
	}

	fn image_url(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("picture")
	}
}
