//! Instagram OAuth2 provider

use crate::core::provider::split_full_name;
use crate::core::{
	AccessToken, OAuth2Config, OAuthProvider, ProviderUserData, SocialAuthError,
	parse_json_token_response,
};

/// Instagram OAuth2 provider
///
/// The profile is wrapped in a `data` envelope and never includes an email.
pub struct InstagramProvider {
	endpoints: OAuth2Config,
}

impl InstagramProvider {
	/// Creates a provider using Instagram's public endpoints
	pub fn new() -> Self {
		Self::with_endpoints(Self::default_endpoints())
	}

	/// Creates a provider against custom endpoints
	pub fn with_endpoints(endpoints: OAuth2Config) -> Self {
		Self { endpoints }
	}

	/// Instagram's public endpoints
	pub fn default_endpoints() -> OAuth2Config {
		OAuth2Config::new(
			"https://api.instagram.com/oauth/authorize",
			"https://api.instagram.com/oauth/access_token",
			"https://api.instagram.com/v1/users/self",
		)
	}
}

impl Default for InstagramProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl OAuthProvider for InstagramProvider {
	fn name(&self) -> &str {
		"instagram"
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
		vec!["basic".to_string()]
	}

	fn parse_token_response(&self, body: &str) -> Result<AccessToken, SocialAuthError> {
		parse_json_token_response(body)
	}

	fn parse_user_data_response(&self, body: &str) -> Result<ProviderUserData, SocialAuthError> {
		ProviderUserData::from_json(body)?
			.get_object("data")
			.ok_or_else(|| SocialAuthError::InvalidResponse("missing `data` envelope".to_string()))
	}

	fn user_id(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("id")
	}

	fn nickname(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("username")
	}

	fn first_name(&self, data: &ProviderUserData) -> Option<String> {
		split_full_name(data.get_str("full_name")).0
	}

	fn last_name(&self, data: &ProviderUserData) -> Option<String> {
		split_full_name(data.get_str("full_name")).1
	}

	fn email(&self, _data: &ProviderUserData) -> Option<String> {
		None
	}

	fn image_url(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("profile_picture")
	}
}
