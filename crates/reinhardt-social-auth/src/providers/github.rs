//! GitHub OAuth2 provider

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::core::provider::split_full_name;
use crate::core::{
	AccessToken, OAuth2Config, OAuthProvider, ProviderUserData, RequestStage, SocialAuthError,
	parse_json_token_response,
};

/// GitHub OAuth2 provider
///
/// GitHub only returns a JSON token response when asked via `Accept`. The
/// profile carries a single display `name`, split into first and last name.
pub struct GitHubProvider {
	endpoints: OAuth2Config,
}

impl GitHubProvider {
	/// Creates a provider using GitHub's public endpoints
	pub fn new() -> Self {
		Self::with_endpoints(Self::default_endpoints())
	}

	/// Creates a provider against custom endpoints (GitHub Enterprise, mocks)
	pub fn with_endpoints(endpoints: OAuth2Config) -> Self {
		Self { endpoints }
	}

	/// GitHub's public endpoints
	pub fn default_endpoints() -> OAuth2Config {
		OAuth2Config::new(
			"https://github.com/login/oauth/authorize",
			"https://github.com/login/oauth/access_token",
			"https://api.github.com/user",
		)
	}
}

impl Default for GitHubProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl OAuthProvider for GitHubProvider {
	fn name(&self) -> &str {
		"github"
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
		vec!["user:email".to_string()]
	}

	fn headers(&self, stage: RequestStage) -> HeaderMap {
		let accept = match stage {
			RequestStage::AccessToken => "application/json",
			RequestStage::UserDetails => "application/vnd.github.v3+json",
		};
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT, HeaderValue::from_static(accept));
		headers
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
		data.get_str("login")
	}

	fn first_name(&self, data: &ProviderUserData) -> Option<String> {
		split_full_name(data.get_str("name")).0
	}

	fn last_name(&self, data: &ProviderUserData) -> Option<String> {
		split_full_name(data.get_str("name")).1
	}

	fn email(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("email")
	}

	fn image_url(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("avatar_url")
	}
}
