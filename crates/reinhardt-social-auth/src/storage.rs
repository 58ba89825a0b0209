//! Linked identity records
//!
//! One [`OAuthIdentity`] row per `(provider, provider_user_id)` pair, matching
//! the table created by the published migration.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::SocialAuthError;

/// Link between a host user and a provider account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthIdentity {
	/// Row id
	pub id: Uuid,
	/// Host user id
	pub user_id: Uuid,
	/// Provider key
	pub provider: String,
	/// User id on the provider side
	pub provider_user_id: String,
	/// Most recent access token
	pub access_token: String,
	/// Creation time
	pub created_at: DateTime<Utc>,
	/// Last login time
	pub updated_at: DateTime<Utc>,
}

impl OAuthIdentity {
	/// Creates a new identity row stamped with the current time
	pub fn new(
		user_id: Uuid,
		provider: impl Into<String>,
		provider_user_id: impl Into<String>,
		access_token: impl Into<String>,
	) -> Self {
		let now = Utc::now();
		Self {
			id: Uuid::new_v4(),
			user_id,
			provider: provider.into(),
			provider_user_id: provider_user_id.into(),
			access_token: access_token.into(),
			created_at: now,
			updated_at: now,
		}
	}

	/// Replaces the stored token and bumps `updated_at`
	pub fn refresh_token(&mut self, access_token: impl Into<String>) {
		self.access_token = access_token.into();
		self.updated_at = Utc::now();
	}
}

/// Persistence for linked identities
#[async_trait]
pub trait IdentityStore: Send + Sync {
	/// Looks up the identity for a provider account
	async fn find(
		&self,
		provider: &str,
		provider_user_id: &str,
	) -> Result<Option<OAuthIdentity>, SocialAuthError>;

	/// Inserts or replaces an identity, keyed by provider account
	async fn save(&self, identity: OAuthIdentity) -> Result<(), SocialAuthError>;

	/// All identities linked to a host user
	async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<OAuthIdentity>, SocialAuthError>;
}

/// In-memory identity store for development and testing
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
	identities: RwLock<HashMap<(String, String), OAuthIdentity>>,
}

impl InMemoryIdentityStore {
	/// Creates an empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored identities
	pub async fn len(&self) -> usize {
		self.identities.read().await.len()
	}

	/// Whether the store is empty
	pub async fn is_empty(&self) -> bool {
		self.identities.read().await.is_empty()
	}
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
	async fn find(
		&self,
		provider: &str,
		provider_user_id: &str,
	) -> Result<Option<OAuthIdentity>, SocialAuthError> {
		let identities = self.identities.read().await;
		Ok(identities
			.get(&(provider.to_string(), provider_user_id.to_string()))
			.cloned())
	}

	async fn save(&self, identity: OAuthIdentity) -> Result<(), SocialAuthError> {
		let key = (identity.provider.clone(), identity.provider_user_id.clone());
		self.identities.write().await.insert(key, identity);
		Ok(())
	}

	async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<OAuthIdentity>, SocialAuthError> {
		let identities = self.identities.read().await;
		let mut linked: Vec<_> = identities
			.values()
			.filter(|identity| identity.user_id == user_id)
			.cloned()
			.collect();
		linked.sort_by(|a, b| a.provider.cmp(&b.provider));
		Ok(linked)
	}
}
