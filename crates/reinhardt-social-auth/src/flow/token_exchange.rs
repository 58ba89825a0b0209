//! Authorization code to access token exchange

use crate::core::{
	AccessToken, OAuth2Client, OAuthProvider, ProviderConfig, RequestStage, SocialAuthError,
};

/// Token exchange flow handler
pub struct TokenExchangeFlow {
	client: OAuth2Client,
	config: ProviderConfig,
}

impl TokenExchangeFlow {
	/// Creates a new token exchange flow
	pub fn new(client: OAuth2Client, config: ProviderConfig) -> Self {
		Self { client, config }
	}

	/// Exchanges an authorization code for an access token
	///
	/// Sends `code`, `client_id`, `client_secret`, `redirect_uri` and
	/// `grant_type=authorization_code` as a form body. Any non-2xx answer is
	/// reported as [`SocialAuthError::InvalidAuthorizationCode`] with the
	/// response body; a 2xx answer is handed to the provider's token parser.
	pub async fn exchange(
		&self,
		provider: &dyn OAuthProvider,
		code: &str,
	) -> Result<AccessToken, SocialAuthError> {
		let params = [
			("code", code),
			("client_id", self.config.client_id.as_str()),
			("client_secret", self.config.client_secret.as_str()),
			("redirect_uri", self.config.redirect_uri.as_str()),
			("grant_type", "authorization_code"),
		];

		tracing::debug!(
			provider = provider.name(),
			endpoint = provider.token_endpoint(),
			"exchanging authorization code"
		);

		let response = self
			.client
			.client()
			.post(provider.token_endpoint())
			.headers(provider.headers(RequestStage::AccessToken))
			.form(&params)
			.send()
			.await
			.map_err(|e| SocialAuthError::Network(e.to_string()))?;

		let status = response.status();
		let body = response
			.text()
			.await
			.map_err(|e| SocialAuthError::Network(e.to_string()))?;

		if !status.is_success() {
			tracing::debug!(
				provider = provider.name(),
				status = status.as_u16(),
				"token endpoint rejected authorization code"
			);
			return Err(SocialAuthError::InvalidAuthorizationCode(Some(body)));
		}

		provider.parse_token_response(&body)
	}
}
