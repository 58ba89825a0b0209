//! Profile fetch from the provider's user data endpoint

use crate::core::{
	AccessToken, OAuth2Client, OAuthProvider, ProviderUserData, RequestStage, SocialAuthError,
};

/// User data flow handler
pub struct UserDataFlow {
	client: OAuth2Client,
}

impl UserDataFlow {
	/// Creates a new user data flow
	pub fn new(client: OAuth2Client) -> Self {
		Self { client }
	}

	/// Fetches and parses the authenticated user's profile
	///
	/// The token travels as a query parameter named by
	/// [`OAuthProvider::access_token_param`]; query parameters already present
	/// in the endpoint URL are kept.
	pub async fn fetch(
		&self,
		provider: &dyn OAuthProvider,
		access_token: &AccessToken,
	) -> Result<ProviderUserData, SocialAuthError> {
		tracing::debug!(
			provider = provider.name(),
			endpoint = provider.user_data_endpoint(),
			"fetching user data"
		);

		let response = self
			.client
			.client()
			.get(provider.user_data_endpoint())
			.headers(provider.headers(RequestStage::UserDetails))
			.query(&[(provider.access_token_param(), access_token.as_str())])
			.send()
			.await
			.map_err(|e| SocialAuthError::Network(e.to_string()))?;

		let status = response.status();
		let body = response
			.text()
			.await
			.map_err(|e| SocialAuthError::Network(e.to_string()))?;

		if !status.is_success() {
			return Err(SocialAuthError::UserDataError {
				status: status.as_u16(),
				body,
			});
		}

		provider.parse_user_data_response(&body)
	}
}
