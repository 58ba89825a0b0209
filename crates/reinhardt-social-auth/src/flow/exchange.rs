//! Per-request OAuth2 flow: authorize, exchange, fetch, normalize

use std::sync::Arc;

use crate::core::details::ProfileFields;
use crate::core::{
	CallbackRequest, OAuth2Client, OAuthProvider, ProviderConfig, ProviderUserDetails,
	SocialAuthError,
};
use crate::flow::{AuthorizationFlow, TokenExchangeFlow, UserDataFlow};

/// One provider's authorization-code flow
///
/// Build one per request context and drop it afterwards; it holds no state
/// between the redirect and the callback. Progress is strictly
/// "not authorized → authorized": the first failure ends the flow and nothing
/// is retried.
pub struct OAuthFlow {
	provider: Arc<dyn OAuthProvider>,
	auth_flow: AuthorizationFlow,
	token_exchange: TokenExchangeFlow,
	user_data: UserDataFlow,
}

impl OAuthFlow {
	/// Creates a flow using a fresh HTTP client
	pub fn new(provider: Arc<dyn OAuthProvider>, config: ProviderConfig) -> Self {
		Self::with_client(provider, config, OAuth2Client::new())
	}

	/// Creates a flow sharing an existing HTTP client
	pub fn with_client(
		provider: Arc<dyn OAuthProvider>,
		config: ProviderConfig,
		client: OAuth2Client,
	) -> Self {
		Self {
			provider,
			auth_flow: AuthorizationFlow::new(config.clone()),
			token_exchange: TokenExchangeFlow::new(client.clone(), config),
			user_data: UserDataFlow::new(client),
		}
	}

	/// The provider driving this flow
	pub fn provider(&self) -> &dyn OAuthProvider {
		self.provider.as_ref()
	}

	/// URL to redirect the user to, carrying the caller's `state` token
	pub fn authorize_url(&self, state: &str) -> String {
		self.auth_flow.build_url(self.provider.as_ref(), state)
	}

	/// Completes the flow from the provider's callback request
	///
	/// # Errors
	///
	/// - [`SocialAuthError::ApplicationRejected`] when the request has no
	///   `code`; no network call is made in that case
	/// - [`SocialAuthError::InvalidAuthorizationCode`] when the token endpoint
	///   rejects the code or returns no access token
	/// - [`SocialAuthError::UserDataError`] when the profile request fails
	pub async fn user_details(
		&self,
		request: &CallbackRequest,
	) -> Result<ProviderUserDetails, SocialAuthError> {
		let provider = self.provider.as_ref();

		let Some(code) = request.code() else {
			tracing::debug!(
				provider = provider.name(),
				error = request.error().unwrap_or_default(),
				"callback without authorization code"
			);
			return Err(SocialAuthError::ApplicationRejected);
		};

		let access_token = self.token_exchange.exchange(provider, code).await?;
		let data = self.user_data.fetch(provider, &access_token).await?;

		let fields = ProfileFields {
			user_id: provider.user_id(&data),
			nickname: provider.nickname(&data),
			first_name: provider.first_name(&data),
			last_name: provider.last_name(&data),
			email: provider.email(&data),
			image_url: provider.image_url(&data),
		};

		tracing::info!(provider = provider.name(), "social login authorized");

		Ok(ProviderUserDetails::new(access_token, fields, data))
	}
}
