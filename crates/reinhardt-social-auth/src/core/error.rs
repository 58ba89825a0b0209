//! Social authentication error types

use thiserror::Error;

/// Social authentication errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialAuthError {
	/// The callback carried no authorization code (user denied or cancelled)
	#[error("Application rejected: the provider returned no authorization code")]
	ApplicationRejected,

	/// The token endpoint rejected the code or returned no access token
	///
	/// Carries the raw response body when one was available.
	#[error("Invalid authorization code{}", .0.as_ref().map(|body| format!(": {}", body)).unwrap_or_default())]
	InvalidAuthorizationCode(Option<String>),

	/// Network error during HTTP requests
	#[error("Network error: {0}")]
	Network(String),

	/// Invalid response from provider
	#[error("Invalid response: {0}")]
	InvalidResponse(String),

	/// The user data endpoint answered with a non-success status
	#[error("User data request failed ({status}): {body}")]
	UserDataError {
		/// HTTP status code
		status: u16,
		/// Raw response body
		body: String,
	},

	/// Configuration error
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// No provider is registered under this key
	#[error("Unknown provider: {0}")]
	UnknownProvider(String),

	/// Invalid OAuth2 state parameter
	#[error("Invalid state")]
	InvalidState,

	/// User mapping error
	#[error("User mapping error: {0}")]
	UserMapping(String),

	/// Storage error
	#[error("Storage error: {0}")]
	Storage(String),
}

impl From<reqwest::Error> for SocialAuthError {
	fn from(error: reqwest::Error) -> Self {
		SocialAuthError::Network(error.to_string())
	}
}

impl From<serde_json::Error> for SocialAuthError {
	fn from(error: serde_json::Error) -> Self {
		SocialAuthError::InvalidResponse(error.to_string())
	}
}

impl From<toml::de::Error> for SocialAuthError {
	fn from(error: toml::de::Error) -> Self {
		SocialAuthError::Configuration(error.to_string())
	}
}
