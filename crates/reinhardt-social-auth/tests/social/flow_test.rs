//! Authorization-code flow tests against the mock provider

use crate::helpers::{MockOAuth2Server, MockResponse, mock_config, mock_flow};
use hyper::{Method, StatusCode};
use reinhardt_social_auth::core::client::USER_AGENT;
use reinhardt_social_auth::{CallbackRequest, OAuth2Client, OAuthFlow, ProviderKind, SocialAuthError};
use rstest::*;

#[tokio::test]
async fn test_missing_code_is_rejected_without_network() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let flow = mock_flow(ProviderKind::GitHub, &server);
	let request = CallbackRequest::from_query("error=access_denied&state=s1");

	// Act
	let result = flow.user_details(&request).await;

	// Assert
	assert_eq!(result.unwrap_err(), SocialAuthError::ApplicationRejected);
	assert_eq!(server.total_hits(), 0);
}

#[tokio::test]
async fn test_token_endpoint_400_carries_body() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_token_response(
		MockResponse::json(r#"{"error":"bad_verification_code"}"#)
			.with_status(StatusCode::BAD_REQUEST),
	);
	let flow = mock_flow(ProviderKind::GitHub, &server);

	// Act
	let result = flow
		.user_details(&CallbackRequest::from_query("code=stale"))
		.await;

	// Assert
	match result.unwrap_err() {
		SocialAuthError::InvalidAuthorizationCode(Some(body)) => {
			assert!(body.contains("bad_verification_code"));
		}
		other => panic!("unexpected error: {:?}", other),
	}
	assert_eq!(server.hits("/token"), 1);
	assert_eq!(server.hits("/user"), 0);
}

#[tokio::test]
async fn test_token_without_access_token() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_token_response(MockResponse::json(r#"{"token_type":"bearer"}"#));
	let flow = mock_flow(ProviderKind::Google, &server);

	// Act
	let result = flow.user_details(&CallbackRequest::from_query("code=c")).await;

	// Assert
	assert!(matches!(
		result,
		Err(SocialAuthError::InvalidAuthorizationCode(_))
	));
	assert_eq!(server.hits("/user"), 0);
}

#[tokio::test]
async fn test_successful_flow() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let flow = mock_flow(ProviderKind::GitHub, &server);

	// Act
	let details = flow
		.user_details(&CallbackRequest::from_query("code=good-code&state=s1"))
		.await
		.unwrap();

	// Assert
	assert_eq!(details.access_token().as_str(), "abc123");
	assert_eq!(details.user_id(), Some("42"));
	assert_eq!(details.first_name(), Some("Jane"));
	assert_eq!(details.last_name(), None);
	assert_eq!(details.email(), None);
	assert_eq!(details.raw().get_str("name").as_deref(), Some("Jane"));
}

#[tokio::test]
async fn test_token_request_shape() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let flow = mock_flow(ProviderKind::GitHub, &server);

	// Act
	flow.user_details(&CallbackRequest::from_query("code=good-code"))
		.await
		.unwrap();

	// Assert
	let token = server.last_request("/token").unwrap();
	assert_eq!(token.method, Method::POST);
	assert_eq!(token.form_param("code").as_deref(), Some("good-code"));
	assert_eq!(token.form_param("client_id").as_deref(), Some("test_client_id"));
	assert_eq!(
		token.form_param("client_secret").as_deref(),
		Some("test_client_secret")
	);
	assert_eq!(
		token.form_param("redirect_uri").as_deref(),
		Some("http://localhost:8080/callback")
	);
	assert_eq!(
		token.form_param("grant_type").as_deref(),
		Some("authorization_code")
	);
	assert_eq!(token.headers.get("accept").unwrap(), "application/json");

	let user = server.last_request("/user").unwrap();
	assert_eq!(user.method, Method::GET);
	assert_eq!(user.query_param("access_token").as_deref(), Some("abc123"));
}

#[rstest]
#[case(StatusCode::UNAUTHORIZED)]
#[case(StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn test_user_data_failure_status(#[case] status: StatusCode) {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_user_response(MockResponse::json(r#"{"message":"Bad credentials"}"#).with_status(status));
	let flow = mock_flow(ProviderKind::GitHub, &server);

	// Act
	let result = flow.user_details(&CallbackRequest::from_query("code=c")).await;

	// Assert
	match result.unwrap_err() {
		SocialAuthError::UserDataError { status: code, body } => {
			assert_eq!(code, status.as_u16());
			assert!(body.contains("Bad credentials"));
		}
		other => panic!("unexpected error: {:?}", other),
	}
}

#[tokio::test]
async fn test_invalid_user_json() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_user_response(MockResponse::json("{invalid json"));
	let flow = mock_flow(ProviderKind::GitHub, &server);

	// Act
	let result = flow.user_details(&CallbackRequest::from_query("code=c")).await;

	// Assert
	assert!(matches!(result, Err(SocialAuthError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_unreachable_provider_is_network_error() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let mut endpoints = server.endpoints();
	endpoints.token_endpoint = "http://127.0.0.1:1/token".to_string();
	let config = crate::helpers::mock_config(&server).with_endpoints(endpoints);
	let flow = reinhardt_social_auth::OAuthFlow::new(ProviderKind::GitHub.build(&config), config);

	// Act
	let result = flow.user_details(&CallbackRequest::from_query("code=c")).await;

	// Assert
	assert!(matches!(result, Err(SocialAuthError::Network(_))));
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let config = mock_config(&server);
	let client = OAuth2Client::try_new().unwrap();
	let flow = OAuthFlow::with_client(ProviderKind::GitHub.build(&config), config, client);

	// Act
	flow.user_details(&CallbackRequest::from_query("code=good-code"))
		.await
		.unwrap();

	// Assert
	for path in ["/token", "/user"] {
		let request = server.last_request(path).unwrap();
		assert_eq!(
			request.headers.get(hyper::header::USER_AGENT).unwrap(),
			USER_AGENT
		);
	}
}
