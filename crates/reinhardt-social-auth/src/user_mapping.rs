//! Mapping provider profiles onto host users

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::{ProviderUserDetails, SocialAuthError};

/// Resolves or creates the host user for a first-time social login
///
/// Called only when no identity exists yet for the provider account; later
/// logins reuse the stored link.
#[async_trait]
pub trait UserMapper: Send + Sync {
	/// Returns the host user id to link `details` to
	async fn map_user(
		&self,
		provider: &str,
		details: &ProviderUserDetails,
	) -> Result<Uuid, SocialAuthError>;
}
