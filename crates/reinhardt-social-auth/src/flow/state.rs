//! State storage for OAuth2 CSRF protection
//!
//! Issued state tokens are bound to a provider key and expire after a TTL.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::SocialAuthError;

const STATE_LENGTH: usize = 40;

/// Data stored for each OAuth2 state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateData {
	/// OAuth2 state parameter
	pub state: String,
	/// Provider key the state was issued for
	pub provider: String,
	/// Expiration timestamp
	pub expires_at: DateTime<Utc>,
}

impl StateData {
	/// Creates new state data with default TTL (10 minutes)
	pub fn new(state: String, provider: String) -> Self {
		Self::with_ttl(state, provider, Duration::minutes(10))
	}

	/// Creates new state data with custom TTL
	pub fn with_ttl(state: String, provider: String, ttl: Duration) -> Self {
		Self {
			state,
			provider,
			expires_at: Utc::now() + ttl,
		}
	}

	/// Issues a random alphanumeric state for `provider`
	pub fn generate(provider: &str) -> Self {
		let state = rand::thread_rng()
			.sample_iter(&Alphanumeric)
			.take(STATE_LENGTH)
			.map(char::from)
			.collect();
		Self::new(state, provider.to_string())
	}

	/// Checks if the state has expired
	pub fn is_expired(&self) -> bool {
		Utc::now() > self.expires_at
	}
}

/// Trait for state storage implementations
#[async_trait]
pub trait StateStore: Send + Sync {
	/// Stores state data
	async fn store(&self, data: StateData) -> Result<(), SocialAuthError>;

	/// Retrieves state data by state string
	async fn retrieve(&self, state: &str) -> Result<StateData, SocialAuthError>;

	/// Removes state data by state string
	async fn remove(&self, state: &str) -> Result<(), SocialAuthError>;

	/// Retrieves and removes state data in one step
	async fn take(&self, state: &str) -> Result<StateData, SocialAuthError> {
		let data = self.retrieve(state).await?;
		self.remove(state).await?;
		Ok(data)
	}
}

/// In-memory state store for development and testing
///
/// Not suitable for multi-instance deployments; back the trait with the
/// session or cache layer there.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
	store: RwLock<HashMap<String, StateData>>,
}

impl InMemoryStateStore {
	/// Creates a new in-memory state store
	pub fn new() -> Self {
		Self {
			store: RwLock::new(HashMap::new()),
		}
	}

	/// Removes expired entries from the store
	async fn cleanup_expired(&self) {
		let mut store = self.store.write().await;
		store.retain(|_, data| !data.is_expired());
	}
}

#[async_trait]
impl StateStore for InMemoryStateStore {
	async fn store(&self, data: StateData) -> Result<(), SocialAuthError> {
		self.cleanup_expired().await;

		let mut store = self.store.write().await;
		store.insert(data.state.clone(), data);
		Ok(())
	}

	async fn retrieve(&self, state: &str) -> Result<StateData, SocialAuthError> {
		let store = self.store.read().await;
		let data = store
			.get(state)
			.ok_or(SocialAuthError::InvalidState)?
			.clone();

		if data.is_expired() {
			return Err(SocialAuthError::InvalidState);
		}

		Ok(data)
	}

	async fn remove(&self, state: &str) -> Result<(), SocialAuthError> {
		let mut store = self.store.write().await;
		store.remove(state).ok_or(SocialAuthError::InvalidState)?;
		Ok(())
	}

	async fn take(&self, state: &str) -> Result<StateData, SocialAuthError> {
		let mut store = self.store.write().await;
		let data = store.remove(state).ok_or(SocialAuthError::InvalidState)?;

		if data.is_expired() {
			return Err(SocialAuthError::InvalidState);
		}

		Ok(data)
	}
}
