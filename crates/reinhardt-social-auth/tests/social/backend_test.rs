//! Login backend tests: state handling and identity linking

use crate::helpers::{MockOAuth2Server, MockResponse, mock_config, mock_flow};
use async_trait::async_trait;
use chrono::Duration;
use reinhardt_social_auth::{
	CallbackRequest, IdentityStore, InMemoryIdentityStore, InMemoryStateStore, ProviderKind,
	ProviderUserDetails, SocialAuthBackend, SocialAuthError, SocialSettings, StateData, StateStore,
	UserMapper,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Maps every new account onto the same host user, counting calls
struct CountingMapper {
	user_id: Uuid,
	calls: AtomicUsize,
}

#[async_trait]
impl UserMapper for CountingMapper {
	async fn map_user(
		&self,
		_provider: &str,
		_details: &ProviderUserDetails,
	) -> Result<Uuid, SocialAuthError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.user_id)
	}
}

struct Harness {
	server: MockOAuth2Server,
	backend: SocialAuthBackend,
	states: Arc<InMemoryStateStore>,
	identities: Arc<InMemoryIdentityStore>,
	mapper: Arc<CountingMapper>,
}

async fn harness() -> Harness {
	let server = MockOAuth2Server::new().await;
	let settings = SocialSettings::default()
		.with_provider("github", mock_config(&server))
		.with_provider("google", mock_config(&server));
	let states = Arc::new(InMemoryStateStore::new());
	let identities = Arc::new(InMemoryIdentityStore::new());
	let mapper = Arc::new(CountingMapper {
		user_id: Uuid::new_v4(),
		calls: AtomicUsize::new(0),
	});
	let backend =
		SocialAuthBackend::from_settings(&settings, states.clone(), identities.clone(), mapper.clone())
			.unwrap();

	Harness {
		server,
		backend,
		states,
		identities,
		mapper,
	}
}

fn state_of(url: &str) -> String {
	url::Url::parse(url)
		.unwrap()
		.query_pairs()
		.find(|(key, _)| key == "state")
		.map(|(_, value)| value.into_owned())
		.unwrap()
}

fn callback(state: &str) -> CallbackRequest {
	CallbackRequest::from_query(&format!("code=good-code&state={}", state))
}

#[tokio::test]
async fn test_first_login_creates_identity() {
	// Arrange
	let h = harness().await;
	let url = h.backend.start_authorization("github").await.unwrap();

	// Act
	let login = h
		.backend
		.handle_callback("github", &callback(&state_of(&url)))
		.await
		.unwrap();

	// Assert
	assert!(login.created);
	assert_eq!(login.user_id, h.mapper.user_id);
	assert_eq!(login.identity.provider, "github");
	assert_eq!(login.identity.provider_user_id, "42");
	assert_eq!(login.identity.access_token, "abc123");
	assert_eq!(login.details.user_id(), Some("42"));
	assert_eq!(h.mapper.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_second_login_reuses_identity() {
	// Arrange
	let h = harness().await;
	let url = h.backend.start_authorization("github").await.unwrap();
	let first = h
		.backend
		.handle_callback("github", &callback(&state_of(&url)))
		.await
		.unwrap();
	h.server.set_token_response(MockResponse::json(r#"{"access_token":"def456"}"#));

	// Act
	let url = h.backend.start_authorization("github").await.unwrap();
	let second = h
		.backend
		.handle_callback("github", &callback(&state_of(&url)))
		.await
		.unwrap();

	// Assert
	assert!(!second.created);
	assert_eq!(second.identity.id, first.identity.id);
	assert_eq!(second.identity.access_token, "def456");
	assert!(second.identity.updated_at >= first.identity.updated_at);
	assert_eq!(h.mapper.calls.load(Ordering::SeqCst), 1);
	assert_eq!(h.identities.len().await, 1);
	let stored = h.identities.find("github", "42").await.unwrap().unwrap();
	assert_eq!(stored.access_token, "def456");
}

#[tokio::test]
async fn test_unknown_state_is_rejected() {
	// Arrange
	let h = harness().await;

	// Act
	let result = h.backend.handle_callback("github", &callback("forged")).await;

	// Assert
	assert_eq!(result.unwrap_err(), SocialAuthError::InvalidState);
	assert_eq!(h.server.total_hits(), 0);
}

#[tokio::test]
async fn test_expired_state_is_rejected() {
	// Arrange
	let h = harness().await;
	h.states
		.store(StateData::with_ttl(
			"stale".to_string(),
			"github".to_string(),
			Duration::seconds(-1),
		))
		.await
		.unwrap();

	// Act
	let result = h.backend.handle_callback("github", &callback("stale")).await;

	// Assert
	assert_eq!(result.unwrap_err(), SocialAuthError::InvalidState);
	assert_eq!(h.server.total_hits(), 0);
}

#[tokio::test]
async fn test_state_from_other_provider_is_rejected() {
	// Arrange
	let h = harness().await;
	let url = h.backend.start_authorization("google").await.unwrap();

	let state = state_of(&url);

	// Act
	let result = h.backend.handle_callback("github", &callback(&state)).await;

	// Assert
	assert_eq!(result.unwrap_err(), SocialAuthError::InvalidState);
	assert_eq!(h.server.total_hits(), 0);
	let login = h
		.backend
		.handle_callback("google", &callback(&state))
		.await
		.unwrap();
	assert_eq!(login.identity.provider, "google");
}

#[tokio::test]
async fn test_state_is_single_use() {
	// Arrange
	let h = harness().await;
	let url = h.backend.start_authorization("github").await.unwrap();
	let state = state_of(&url);
	h.backend
		.handle_callback("github", &callback(&state))
		.await
		.unwrap();

	// Act
	let replay = h.backend.handle_callback("github", &callback(&state)).await;

	// Assert
	assert_eq!(replay.unwrap_err(), SocialAuthError::InvalidState);
}

#[tokio::test]
async fn test_missing_provider_user_id() {
	// Arrange
	let h = harness().await;
	h.server.set_user_response(MockResponse::json(r#"{"login":"ghost"}"#));
	let url = h.backend.start_authorization("github").await.unwrap();

	// Act
	let result = h
		.backend
		.handle_callback("github", &callback(&state_of(&url)))
		.await;

	// Assert
	assert!(matches!(result, Err(SocialAuthError::UserMapping(_))));
	assert!(h.identities.is_empty().await);
	assert_eq!(h.mapper.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_denied_consent_consumes_state() {
	// Arrange
	let h = harness().await;
	let url = h.backend.start_authorization("github").await.unwrap();
	let state = state_of(&url);
	let denied = CallbackRequest::from_query(&format!("error=access_denied&state={}", state));

	// Act
	let result = h.backend.handle_callback("github", &denied).await;

	// Assert
	assert_eq!(result.unwrap_err(), SocialAuthError::ApplicationRejected);
	assert!(h.states.retrieve(&state).await.is_err());
}

#[tokio::test]
async fn test_registered_flow_completes_login() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let identities = Arc::new(InMemoryIdentityStore::new());
	let mapper = Arc::new(CountingMapper {
		user_id: Uuid::new_v4(),
		calls: AtomicUsize::new(0),
	});
	let mut backend = SocialAuthBackend::new(
		Arc::new(InMemoryStateStore::new()),
		identities.clone(),
		mapper.clone(),
	);
	backend.register("github-enterprise", mock_flow(ProviderKind::GitHub, &server));
	let url = backend.start_authorization("github-enterprise").await.unwrap();

	// Act
	let login = backend
		.handle_callback("github-enterprise", &callback(&state_of(&url)))
		.await
		.unwrap();

	// Assert
	assert_eq!(backend.providers().collect::<Vec<_>>(), vec!["github-enterprise"]);
	assert!(login.created);
	assert_eq!(login.user_id, mapper.user_id);
	assert_eq!(login.identity.provider, "github-enterprise");
	assert!(
		identities
			.find("github-enterprise", "42")
			.await
			.unwrap()
			.is_some()
	);
	assert_eq!(server.hits("/token"), 1);
	assert_eq!(server.hits("/user"), 1);
}
