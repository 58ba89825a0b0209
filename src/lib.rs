//! # Reinhardt Social
//!
//! OAuth2 "social login" for the Reinhardt framework.
//!
//! - [`auth`]: provider flows, state handling and identity linking
//!   (`reinhardt-social-auth`)
//! - [`commands`]: the `install` command publishing `social_auth.toml` and the
//!   identities migration (`reinhardt-social-commands`, feature `commands`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use reinhardt_social::{SocialSettings, ProviderKind};
//!
//! # fn run() -> Result<(), reinhardt_social::SocialAuthError> {
//! let settings = SocialSettings::from_file("config/social_auth.toml")?;
//! for key in settings.providers.keys() {
//! 	let kind: ProviderKind = key.parse()?;
//! 	println!("{} -> {}", key, kind.default_endpoints().authorization_endpoint);
//! }
//! # Ok(())
//! # }
//! ```

pub use reinhardt_social_auth as auth;

#[cfg(feature = "commands")]
pub use reinhardt_social_commands as commands;

// Re-export the commonly used auth types
pub use reinhardt_social_auth::{
	AccessToken, CallbackRequest, IdentityStore, InMemoryIdentityStore, InMemoryStateStore,
	OAuth2Config, OAuthFlow, OAuthIdentity, OAuthProvider, ProviderConfig, ProviderKind,
	ProviderUserDetails, SocialAuthBackend, SocialAuthError, SocialLogin, SocialSettings,
	StateStore, UserMapper,
};

#[cfg(feature = "commands")]
pub use reinhardt_social_commands::{InstallCommand, Installer};
