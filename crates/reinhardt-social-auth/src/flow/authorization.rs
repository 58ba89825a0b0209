//! Authorization URL generation

use url::form_urlencoded;

use crate::core::{OAuthProvider, ProviderConfig};

/// Builds the URL the user is redirected to for consent
pub struct AuthorizationFlow {
	config: ProviderConfig,
}

impl AuthorizationFlow {
	/// Creates a new authorization flow
	pub fn new(config: ProviderConfig) -> Self {
		Self { config }
	}

	/// Provider default scopes followed by the configured ones
	pub fn scopes(&self, provider: &dyn OAuthProvider) -> Vec<String> {
		let mut scopes = provider.default_scopes();
		scopes.extend(self.config.scopes.iter().cloned());
		scopes
	}

	/// Joins the requested scopes with the provider's separator
	pub fn compile_scopes(&self, provider: &dyn OAuthProvider) -> String {
		self.scopes(provider).join(provider.scope_separator())
	}

	/// Builds the authorization URL
	///
	/// Query parameters, in order: `client_id`, `scope`, `redirect_uri`,
	/// `response_type=code`, `state`. Every value is form-urlencoded.
	pub fn build_url(&self, provider: &dyn OAuthProvider, state: &str) -> String {
		let query = form_urlencoded::Serializer::new(String::new())
			.append_pair("client_id", &self.config.client_id)
			.append_pair("scope", &self.compile_scopes(provider))
			.append_pair("redirect_uri", &self.config.redirect_uri)
			.append_pair("response_type", "code")
			.append_pair("state", state)
			.finish();

		let endpoint = provider.authorize_endpoint();
		let separator = if endpoint.contains('?') { '&' } else { '?' };
		format!("{}{}{}", endpoint, separator, query)
	}
}
