//! HTTP client shared by the OAuth2 flows

use super::SocialAuthError;

/// `User-Agent` sent with every provider request
pub const USER_AGENT: &str = concat!("reinhardt-social/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around [`reqwest::Client`]
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct OAuth2Client {
	client: reqwest::Client,
}

impl OAuth2Client {
	/// Creates a client with the crate's user agent
	///
	/// Falls back to a plain client, with a warning, when the TLS backend
	/// cannot be initialised; use [`try_new`](Self::try_new) to fail instead.
	pub fn new() -> Self {
		Self::try_new().unwrap_or_else(|error| {
			tracing::warn!(
				%error,
				"failed to build HTTP client, falling back to one without a user agent"
			);
			Self::with_client(reqwest::Client::new())
		})
	}

	/// Creates a client with the crate's user agent
	///
	/// Some providers (GitHub) reject API requests without a `User-Agent`.
	///
	/// # Errors
	///
	/// [`SocialAuthError::Network`] when the underlying client cannot be built.
	pub fn try_new() -> Result<Self, SocialAuthError> {
		let client = reqwest::Client::builder()
			.user_agent(USER_AGENT)
			.build()?;
		Ok(Self { client })
	}

	/// Wraps a preconfigured client (proxies, timeouts, TLS settings)
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}

	/// Returns the underlying client
	pub fn client(&self) -> &reqwest::Client {
		&self.client
	}
}

impl Default for OAuth2Client {
	fn default() -> Self {
		Self::new()
	}
}
