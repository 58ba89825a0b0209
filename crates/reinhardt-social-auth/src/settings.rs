//! The `social_auth.toml` configuration file
//!
//! ```toml
//! identity_table = "oauth_identities"
//!
//! [providers.github]
//! client_id = "..."
//! client_secret = "..."
//! redirect_uri = "https://example.com/auth/github/callback"
//! scopes = ["repo"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::{ProviderConfig, SocialAuthError};

fn default_identity_table() -> String {
	"oauth_identities".to_string()
}

/// Social login settings, keyed by provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSettings {
	/// Table holding linked identities
	///
	/// Read by host [`IdentityStore`](crate::storage::IdentityStore)
	/// implementations backed by a database. The bundled migration creates
	/// `oauth_identities`; rename the table there too when changing this.
	/// [`InMemoryIdentityStore`](crate::storage::InMemoryIdentityStore) has no
	/// table and ignores it.
	#[serde(default = "default_identity_table")]
	pub identity_table: String,

	/// Provider configurations keyed by provider key (`github`, `google`, ...)
	#[serde(default)]
	pub providers: BTreeMap<String, ProviderConfig>,
}

impl Default for SocialSettings {
	fn default() -> Self {
		Self {
			identity_table: default_identity_table(),
			providers: BTreeMap::new(),
		}
	}
}

impl SocialSettings {
	/// Parses and validates settings from TOML text
	pub fn from_toml_str(content: &str) -> Result<Self, SocialAuthError> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads and validates settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SocialAuthError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| {
			SocialAuthError::Configuration(format!("failed to read {}: {}", path.display(), e))
		})?;
		Self::from_toml_str(&content)
	}

	/// Adds or replaces a provider configuration
	pub fn with_provider(mut self, key: impl Into<String>, config: ProviderConfig) -> Self {
		self.providers.insert(key.into(), config);
		self
	}

	/// Returns the configuration registered under `key`
	pub fn provider(&self, key: &str) -> Option<&ProviderConfig> {
		self.providers.get(key)
	}

	/// Checks every provider for blank credentials
	pub fn validate(&self) -> Result<(), SocialAuthError> {
		if self.identity_table.trim().is_empty() {
			return Err(SocialAuthError::Configuration(
				"identity_table must not be empty".to_string(),
			));
		}
		for (key, config) in &self.providers {
			config.validate().map_err(|message| {
				SocialAuthError::Configuration(format!("providers.{}: {}", key, message))
			})?;
		}
		Ok(())
	}
}
