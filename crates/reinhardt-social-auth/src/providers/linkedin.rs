//! LinkedIn OAuth2 provider

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::core::{
	AccessToken, OAuth2Config, OAuthProvider, ProviderUserData, RequestStage, SocialAuthError,
	parse_json_token_response,
};

/// LinkedIn OAuth2 provider
///
/// The People API takes the token as `oauth2_access_token` and needs
/// `format=json`, which the default profile endpoint already carries along with
/// its field selector.
pub struct LinkedInProvider {
	endpoints: OAuth2Config,
}

impl LinkedInProvider {
	/// Creates a provider using LinkedIn's public endpoints
	pub fn new() -> Self {
		Self::with_endpoints(Self::default_endpoints())
	}

	/// Creates a provider against custom endpoints
	pub fn with_endpoints(endpoints: OAuth2Config) -> Self {
		Self { endpoints }
	}

	/// LinkedIn's public endpoints
	pub fn default_endpoints() -> OAuth2Config {
		OAuth2Config::new(
			"https://www.linkedin.com/uas/oauth2/authorization",
			"https://www.linkedin.com/uas/oauth2/accessToken",
			"https://api.linkedin.com/v1/people/~:(id,first-name,last-name,email-address,picture-url)?format=json",
		)
	}
}

impl Default for LinkedInProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl OAuthProvider for LinkedInProvider {
	fn name(&self) -> &str {
		"linkedin"
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
		vec!["r_basicprofile".to_string(), "r_emailaddress".to_string()]
	}

	fn scope_separator(&self) -> &str {
		" "
	}

	fn access_token_param(&self) -> &str {
		"oauth2_access_token"
	}

	fn headers(&self, stage: RequestStage) -> HeaderMap {
		let mut headers = HeaderMap::new();
		if stage == RequestStage::UserDetails {
			headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		}
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
		data.get_str("emailAddress")
	}

	fn first_name(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("firstName")
	}

	fn last_name(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("lastName")
	}

	fn email(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("emailAddress")
	}

	fn image_url(&self, data: &ProviderUserData) -> Option<String> {
		data.get_str("pictureUrl")
	}
}
