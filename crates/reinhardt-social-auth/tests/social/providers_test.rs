//! End-to-end provider behavior against the mock server

use crate::helpers::{MockOAuth2Server, MockResponse, mock_flow};
use reinhardt_social_auth::{CallbackRequest, ProviderKind};

#[tokio::test]
async fn test_facebook_form_encoded_token() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_token_response(MockResponse::form("access_token=fb-token&expires=5183944"));
	server.set_user_response(MockResponse::json(
		r#"{"id":"10001","first_name":"Mark","last_name":"Z","email":"mark@example.com"}"#,
	));
	let flow = mock_flow(ProviderKind::Facebook, &server);

	// Act
	let details = flow
		.user_details(&CallbackRequest::from_query("code=c"))
		.await
		.unwrap();

	// Assert
	assert_eq!(details.access_token().as_str(), "fb-token");
	assert_eq!(details.email(), Some("mark@example.com"));
	assert_eq!(
		details.image_url(),
		Some("https://graph.facebook.com/10001/picture")
	);
}

#[tokio::test]
async fn test_linkedin_token_parameter_name() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_user_response(MockResponse::json(
		r#"{"id":"li-1","firstName":"Ada","lastName":"Lovelace","emailAddress":"ada@example.com"}"#,
	));
	let flow = mock_flow(ProviderKind::LinkedIn, &server);

	// Act
	let details = flow
		.user_details(&CallbackRequest::from_query("code=c"))
		.await
		.unwrap();

	// Assert
	let request = server.last_request("/user").unwrap();
	assert_eq!(
		request.query_param("oauth2_access_token").as_deref(),
		Some("abc123")
	);
	assert_eq!(request.query_param("access_token"), None);
	assert_eq!(details.nickname(), Some("ada@example.com"));
	assert_eq!(details.last_name(), Some("Lovelace"));
}

#[tokio::test]
async fn test_instagram_data_envelope() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_user_response(MockResponse::json(
		r#"{"data":{"id":"1574083","username":"snoopdogg","full_name":"Snoop Dogg","profile_picture":"https://example.com/p.jpg"}}"#,
	));
	let flow = mock_flow(ProviderKind::Instagram, &server);

	// Act
	let details = flow
		.user_details(&CallbackRequest::from_query("code=c"))
		.await
		.unwrap();

	// Assert
	assert_eq!(details.user_id(), Some("1574083"));
	assert_eq!(details.nickname(), Some("snoopdogg"));
	assert_eq!(details.first_name(), Some("Snoop"));
	assert_eq!(details.last_name(), Some("Dogg"));
	assert_eq!(details.email(), None);
}

#[tokio::test]
async fn test_google_missing_optional_fields() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_user_response(MockResponse::json(r#"{"id":"g-1"}"#));
	let flow = mock_flow(ProviderKind::Google, &server);

	// Act
	let details = flow
		.user_details(&CallbackRequest::from_query("code=c"))
		.await
		.unwrap();

	// Assert
	assert_eq!(details.user_id(), Some("g-1"));
	assert_eq!(details.nickname(), None);
	assert_eq!(details.first_name(), None);
	assert_eq!(details.last_name(), None);
	assert_eq!(details.email(), None);
	assert_eq!(details.image_url(), None);
}

#[tokio::test]
async fn test_authorize_url_targets_override() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let flow = mock_flow(ProviderKind::Google, &server);

	// Act
	let url = flow.authorize_url("xyz");

	// Assert
	let expected_prefix = format!("{}?client_id=test_client_id", server.endpoints().authorization_endpoint);
	assert!(url.starts_with(&expected_prefix));
	assert!(url.contains("scope=profile+email"));
	assert!(url.ends_with("&response_type=code&state=xyz"));
}
