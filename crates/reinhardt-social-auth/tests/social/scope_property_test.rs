//! Property-based tests for scope encoding in authorize URLs

use proptest::prelude::*;
use reinhardt_social_auth::{AuthorizationFlow, GitHubProvider, OAuthProvider, ProviderConfig};
use url::Url;

/// Provider with no default scopes and the default `,` separator
struct BareProvider;

impl OAuthProvider for BareProvider {
	fn authorize_endpoint(&self) -> &str {
		"https://provider.example.com/oauth/authorize"
	}

	fn token_endpoint(&self) -> &str {
		"https://provider.example.com/oauth/token"
	}

	fn user_data_endpoint(&self) -> &str {
		"https://provider.example.com/me"
	}

	fn parse_token_response(
		&self,
		body: &str,
	) -> Result<reinhardt_social_auth::AccessToken, reinhardt_social_auth::SocialAuthError> {
		reinhardt_social_auth::core::parse_json_token_response(body)
	}

	fn parse_user_data_response(
		&self,
		body: &str,
	) -> Result<reinhardt_social_auth::ProviderUserData, reinhardt_social_auth::SocialAuthError>
	{
		reinhardt_social_auth::ProviderUserData::from_json(body)
	}

	fn user_id(&self, data: &reinhardt_social_auth::ProviderUserData) -> Option<String> {
		data.get_str("id")
	}

	fn nickname(&self, _data: &reinhardt_social_auth::ProviderUserData) -> Option<String> {
		None
	}

	fn first_name(&self, _data: &reinhardt_social_auth::ProviderUserData) -> Option<String> {
		None
	}

	fn last_name(&self, _data: &reinhardt_social_auth::ProviderUserData) -> Option<String> {
		None
	}

	fn email(&self, _data: &reinhardt_social_auth::ProviderUserData) -> Option<String> {
		None
	}

	fn image_url(&self, _data: &reinhardt_social_auth::ProviderUserData) -> Option<String> {
		None
	}
}

fn config(scopes: &[String]) -> ProviderConfig {
	ProviderConfig::new(
		"client".to_string(),
		"secret".to_string(),
		"https://example.com/cb".to_string(),
	)
	.with_scopes(scopes.iter().cloned())
}

fn query_value(url: &str, key: &str) -> Option<String> {
	Url::parse(url)
		.ok()?
		.query_pairs()
		.find(|(k, _)| k == key)
		.map(|(_, v)| v.into_owned())
}

proptest! {
	#[test]
	fn scope_is_comma_joined_then_encoded(scopes in prop::collection::vec("[a-z:_./ ]{1,12}", 0..6)) {
		let flow = AuthorizationFlow::new(config(&scopes));

		let url = flow.build_url(&BareProvider, "state");

		let joined = scopes.join(",");
		let encoded: String = url::form_urlencoded::byte_serialize(joined.as_bytes()).collect();
		let expected = format!("scope={}&", encoded);
		prop_assert!(url.contains(&expected));
		prop_assert_eq!(query_value(&url, "scope"), Some(joined));
	}

	#[test]
	fn defaults_precede_configured_scopes(scopes in prop::collection::vec("[a-z]{1,8}", 0..4)) {
		let flow = AuthorizationFlow::new(config(&scopes));

		let compiled = flow.compile_scopes(&GitHubProvider::new());

		let mut expected = vec!["user:email".to_string()];
		expected.extend(scopes.iter().cloned());
		prop_assert_eq!(compiled, expected.join(","));
	}

	#[test]
	fn state_round_trips(state in "[A-Za-z0-9]{1,40}") {
		let flow = AuthorizationFlow::new(config(&[]));

		let url = flow.build_url(&BareProvider, &state);

		prop_assert_eq!(query_value(&url, "state"), Some(state));
	}
}
