//! # Reinhardt Social Auth
//!
//! OAuth2 "social login" for the Reinhardt framework.
//!
//! The crate performs the standard authorization-code exchange against a
//! third-party provider and normalizes the returned profile into a uniform
//! [`ProviderUserDetails`] value.
//!
//! ## Supported Providers
//!
//! - **GitHub** (`github`)
//! - **Facebook** (`facebook`)
//! - **Google** (`google`)
//! - **LinkedIn** (`linkedin`)
//! - **Instagram** (`instagram`)
//!
//! ## Architecture
//!
//! - [`core`]: provider trait, configuration, errors and the data model
//! - [`flow`]: authorize URL, token exchange, profile fetch and the per-request [`OAuthFlow`]
//! - [`providers`]: built-in providers and [`ProviderKind`] runtime selection
//! - [`backend`]: state issuance and identity linking on top of the flow
//! - [`storage`]: identity records created by the published migration
//! - [`settings`]: the `social_auth.toml` configuration file
//!
//! ## Example
//!
//! ```rust,no_run
//! use reinhardt_social_auth::{CallbackRequest, OAuthFlow, ProviderConfig, ProviderKind};
//!
//! # async fn run() -> Result<(), reinhardt_social_auth::SocialAuthError> {
//! let config = ProviderConfig::new(
//! 	"client_id".to_string(),
//! 	"client_secret".to_string(),
//! 	"https://example.com/auth/github/callback".to_string(),
//! );
//! let provider = ProviderKind::GitHub.build(&config);
//! let flow = OAuthFlow::new(provider, config);
//!
//! // Redirect the user here
//! let url = flow.authorize_url("csrf-state");
//!
//! // ...and on callback
//! let request = CallbackRequest::from_query("code=abc&state=csrf-state");
//! let details = flow.user_details(&request).await?;
//! println!("{:?} <{:?}>", details.nickname(), details.email());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod core;
pub mod flow;
pub mod providers;
pub mod settings;
pub mod storage;
pub mod user_mapping;

pub use core::{
	AccessToken, CallbackRequest, OAuth2Client, OAuth2Config, OAuthProvider, ProviderConfig,
	ProviderUserData, ProviderUserDetails, RequestStage, SocialAuthError,
};

pub use flow::{
	AuthorizationFlow, InMemoryStateStore, OAuthFlow, StateData, StateStore, TokenExchangeFlow,
	UserDataFlow,
};

pub use providers::{
	FacebookProvider, GitHubProvider, GoogleProvider, InstagramProvider, LinkedInProvider,
	ProviderKind,
};

pub use backend::{SocialAuthBackend, SocialLogin};
pub use settings::SocialSettings;
pub use storage::{IdentityStore, InMemoryIdentityStore, OAuthIdentity};
pub use user_mapping::UserMapper;
