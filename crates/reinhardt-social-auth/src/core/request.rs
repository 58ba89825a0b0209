//! Inbound callback request

use std::collections::HashMap;

/// Parameters of the request a provider redirects back to
///
/// Built from the query string, the urlencoded form body, or both. When a key
/// appears in both, the query value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackRequest {
	params: HashMap<String, String>,
}

impl CallbackRequest {
	/// Creates a request from already-extracted parameters
	pub fn new(params: HashMap<String, String>) -> Self {
		Self { params }
	}

	/// Parses an urlencoded query string, with or without the leading `?`
	pub fn from_query(query: &str) -> Self {
		Self {
			params: parse_urlencoded(query.trim_start_matches('?')),
		}
	}

	/// Reads the query string of a request URI
	pub fn from_uri(uri: &http::Uri) -> Self {
		Self::from_query(uri.query().unwrap_or_default())
	}

	/// Reads the query string of an inbound HTTP request
	pub fn from_http_request<B>(request: &http::Request<B>) -> Self {
		Self::from_uri(request.uri())
	}

	/// Merges parameters from an urlencoded form body
	pub fn with_form_body(mut self, body: &str) -> Self {
		for (key, value) in parse_urlencoded(body) {
			self.params.entry(key).or_insert(value);
		}
		self
	}

	/// Returns a parameter value
	pub fn get(&self, key: &str) -> Option<&str> {
		self.params.get(key).map(String::as_str)
	}

	/// Checks whether a non-empty parameter is present
	pub fn has(&self, key: &str) -> bool {
		self.get(key).is_some_and(|value| !value.is_empty())
	}

	/// Authorization code sent by the provider
	pub fn code(&self) -> Option<&str> {
		self.get("code").filter(|code| !code.is_empty())
	}

	/// State token round-tripped through the authorize URL
	pub fn state(&self) -> Option<&str> {
		self.get("state").filter(|state| !state.is_empty())
	}

	/// Error code sent by providers when the user denies access
	pub fn error(&self) -> Option<&str> {
		self.get("error")
	}
}

fn parse_urlencoded(input: &str) -> HashMap<String, String> {
	url::form_urlencoded::parse(input.as_bytes())
		.into_owned()
		.collect()
}
