//! Built-in OAuth2 provider implementations

pub mod facebook;
pub mod github;
pub mod google;
pub mod instagram;
pub mod linkedin;

pub use facebook::FacebookProvider;
pub use github::GitHubProvider;
pub use google::GoogleProvider;
pub use instagram::InstagramProvider;
pub use linkedin::LinkedInProvider;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::{OAuth2Config, OAuthProvider, ProviderConfig, SocialAuthError};

/// Built-in provider selected by its configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
	/// `github`
	GitHub,
	/// `facebook`
	Facebook,
	/// `google`
	Google,
	/// `linkedin`
	LinkedIn,
	/// `instagram`
	Instagram,
}

impl ProviderKind {
	/// All built-in providers
	pub const ALL: [ProviderKind; 5] = [
		ProviderKind::GitHub,
		ProviderKind::Facebook,
		ProviderKind::Google,
		ProviderKind::LinkedIn,
		ProviderKind::Instagram,
	];

	/// Configuration key of this provider
	pub fn key(self) -> &'static str {
		match self {
			ProviderKind::GitHub => "github",
			ProviderKind::Facebook => "facebook",
			ProviderKind::Google => "google",
			ProviderKind::LinkedIn => "linkedin",
			ProviderKind::Instagram => "instagram",
		}
	}

	/// Instantiates the provider, honouring endpoint overrides in `config`
	pub fn build(self, config: &ProviderConfig) -> Arc<dyn OAuthProvider> {
		let endpoints = config
			.oauth2
			.clone()
			.unwrap_or_else(|| self.default_endpoints());

		match self {
			ProviderKind::GitHub => Arc::new(GitHubProvider::with_endpoints(endpoints)),
			ProviderKind::Facebook => Arc::new(FacebookProvider::with_endpoints(endpoints)),
			ProviderKind::Google => Arc::new(GoogleProvider::with_endpoints(endpoints)),
			ProviderKind::LinkedIn => Arc::new(LinkedInProvider::with_endpoints(endpoints)),
			ProviderKind::Instagram => Arc::new(InstagramProvider::with_endpoints(endpoints)),
		}
	}

	/// The provider's public endpoints
	pub fn default_endpoints(self) -> OAuth2Config {
		match self {
			ProviderKind::GitHub => GitHubProvider::default_endpoints(),
			ProviderKind::Facebook => FacebookProvider::default_endpoints(),
			ProviderKind::Google => GoogleProvider::default_endpoints(),
			ProviderKind::LinkedIn => LinkedInProvider::default_endpoints(),
			ProviderKind::Instagram => InstagramProvider::default_endpoints(),
		}
	}
}

impl FromStr for ProviderKind {
	type Err = SocialAuthError;

	fn from_str(key: &str) -> Result<Self, Self::Err> {
		ProviderKind::ALL
			.into_iter()
			.find(|kind| kind.key().eq_ignore_ascii_case(key.trim()))
			.ok_or_else(|| SocialAuthError::UnknownProvider(key.to_string()))
	}
}

impl fmt::Display for ProviderKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}
