//! Social login backend
//!
//! Ties the per-request [`OAuthFlow`] to the host application: issues and
//! checks state tokens, then links the provider account to a host user.

use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::{CallbackRequest, OAuth2Client, ProviderUserDetails, SocialAuthError};
use crate::flow::{OAuthFlow, StateData, StateStore};
use crate::providers::ProviderKind;
use crate::settings::SocialSettings;
use crate::storage::{IdentityStore, OAuthIdentity};
use crate::user_mapping::UserMapper;

/// Outcome of a completed social login
#[derive(Debug, Clone)]
pub struct SocialLogin {
	/// Host user the provider account is linked to
	pub user_id: Uuid,
	/// The stored identity after this login
	pub identity: OAuthIdentity,
	/// Normalized profile returned by the provider
	pub details: ProviderUserDetails,
	/// Whether this login created the identity
	pub created: bool,
}

/// Social login backend over the configured providers
pub struct SocialAuthBackend {
	flows: BTreeMap<String, OAuthFlow>,
	state_store: Arc<dyn StateStore>,
	identity_store: Arc<dyn IdentityStore>,
	user_mapper: Arc<dyn UserMapper>,
}

impl SocialAuthBackend {
	/// Creates a backend without any provider registered
	pub fn new(
		state_store: Arc<dyn StateStore>,
		identity_store: Arc<dyn IdentityStore>,
		user_mapper: Arc<dyn UserMapper>,
	) -> Self {
		Self {
			flows: BTreeMap::new(),
			state_store,
			identity_store,
			user_mapper,
		}
	}

	/// Registers every provider listed in `settings`
	///
	/// # Errors
	///
	/// [`SocialAuthError::Configuration`] when a key does not name a built-in
	/// provider or its credentials are blank.
	pub fn from_settings(
		settings: &SocialSettings,
		state_store: Arc<dyn StateStore>,
		identity_store: Arc<dyn IdentityStore>,
		user_mapper: Arc<dyn UserMapper>,
	) -> Result<Self, SocialAuthError> {
		settings.validate()?;

		let client = OAuth2Client::new();
		let mut backend = Self::new(state_store, identity_store, user_mapper);
		for (key, config) in &settings.providers {
			let kind: ProviderKind = key.parse().map_err(|_| {
				SocialAuthError::Configuration(format!("unsupported provider: {}", key))
			})?;
			let flow = OAuthFlow::with_client(kind.build(config), config.clone(), client.clone());
			backend.flows.insert(key.clone(), flow);
		}

		tracing::debug!(
			providers = ?backend.flows.keys().collect::<Vec<_>>(),
			"social auth backend configured"
		);
		Ok(backend)
	}

	/// Registers a flow under `key`, replacing any previous one
	pub fn register(&mut self, key: impl Into<String>, flow: OAuthFlow) {
		self.flows.insert(key.into(), flow);
	}

	/// Keys of the registered providers
	pub fn providers(&self) -> impl Iterator<Item = &str> {
		self.flows.keys().map(String::as_str)
	}

	fn flow(&self, key: &str) -> Result<&OAuthFlow, SocialAuthError> {
		self.flows
			.get(key)
			.ok_or_else(|| SocialAuthError::UnknownProvider(key.to_string()))
	}

	/// Issues a state token for `key` and returns the authorize URL
	pub async fn start_authorization(&self, key: &str) -> Result<String, SocialAuthError> {
		let flow = self.flow(key)?;
		let state = StateData::generate(key);
		let url = flow.authorize_url(&state.state);
		self.state_store.store(state).await?;

		tracing::debug!(provider = key, "authorization started");
		Ok(url)
	}

	/// Completes a login from the provider's callback
	///
	/// The state token is consumed before the exchange, so a callback can be
	/// handled at most once. A state presented on another provider's callback
	/// is rejected and left in place for its own provider.
	pub async fn handle_callback(
		&self,
		key: &str,
		request: &CallbackRequest,
	) -> Result<SocialLogin, SocialAuthError> {
		let flow = self.flow(key)?;

		let state = request.state().ok_or(SocialAuthError::InvalidState)?;
		let issued = self.state_store.retrieve(state).await?;
		if issued.provider != key {
			tracing::warn!(
				provider = key,
				issued_for = %issued.provider,
				"state issued for another provider"
			);
			return Err(SocialAuthError::InvalidState);
		}
		self.state_store.take(state).await?;

		let details = flow.user_details(request).await?;
		self.link_identity(key, details).await
	}

	async fn link_identity(
		&self,
		key: &str,
		details: ProviderUserDetails,
	) -> Result<SocialLogin, SocialAuthError> {
		let provider_user_id = details
			.user_id()
			.ok_or_else(|| {
				SocialAuthError::UserMapping("provider returned no user id".to_string())
			})?
			.to_string();

		let existing = self.identity_store.find(key, &provider_user_id).await?;
		let (identity, created) = match existing {
			Some(mut identity) => {
				identity.refresh_token(details.access_token().as_str());
				(identity, false)
			}
			None => {
				let user_id = self.user_mapper.map_user(key, &details).await?;
				let identity = OAuthIdentity::new(
					user_id,
					key,
					provider_user_id,
					details.access_token().as_str(),
				);
				(identity, true)
			}
		};
		self.identity_store.save(identity.clone()).await?;

		tracing::info!(
			provider = key,
			user_id = %identity.user_id,
			created,
			"social identity linked"
		);

		Ok(SocialLogin {
			user_id: identity.user_id,
			identity,
			details,
			created,
		})
	}
}
