//! Core types shared by every provider

pub mod client;
pub mod config;
pub mod details;
pub mod error;
pub mod provider;
pub mod request;

pub use client::OAuth2Client;
pub use config::{OAuth2Config, ProviderConfig};
pub use details::{AccessToken, ProviderUserData, ProviderUserDetails};
pub use error::SocialAuthError;
pub use provider::{OAuthProvider, RequestStage, parse_json_token_response};
pub use request::CallbackRequest;
