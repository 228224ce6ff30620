use crate::fixtures;
use mockito::Matcher;
use serde_json::json;
use signinghub_client::prelude::*;

fn unauthenticated(url: &str) -> Connection {
    Connection::builder(url)
        .client("client-id", "client-secret")
        .user("alice@example.com", "secret")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_authenticate_stores_tokens() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/authenticate")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "password".into()),
            Matcher::UrlEncoded("client_id".into(), "client-id".into()),
            Matcher::UrlEncoded("client_secret".into(), "client-secret".into()),
            Matcher::UrlEncoded("username".into(), "alice@example.com".into()),
            Matcher::UrlEncoded("password".into(), "secret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("x-change-password", "change-token")
        .with_body(
            json!({
                "access_token": "access",
                "refresh_token": "refresh",
                "token_type": "bearer",
                "expires_in": 86399
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut connection = unauthenticated(&server.url());
    let response = connection.authenticate().await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 200);
    assert_eq!(connection.access_token(), Some("access"));
    assert_eq!(connection.refresh_token(), Some("refresh"));
    assert_eq!(connection.x_change_password_token(), Some("change-token"));
    assert!(connection.token_obtained_at().is_some());
}

#[tokio::test]
async fn test_authenticate_sends_scope_only_when_set() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/authenticate")
        .match_body(Matcher::UrlEncoded("scope".into(), "bob@example.com".into()))
        .with_status(200)
        .with_body(json!({"access_token": "a", "refresh_token": "r"}).to_string())
        .create_async()
        .await;

    let mut connection = Connection::builder(server.url())
        .client("client-id", "client-secret")
        .user("alice@example.com", "secret")
        .scope("bob@example.com")
        .build()
        .unwrap();
    connection.authenticate().await.unwrap();

    mock.assert_async().await;
    assert!(connection.is_authenticated());
    assert_eq!(connection.x_change_password_token(), None);
}

#[tokio::test]
async fn test_authenticate_rejected_clears_tokens() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/authenticate")
        .with_status(400)
        .with_body(json!({"error": "invalid_grant"}).to_string())
        .create_async()
        .await;

    let mut connection = fixtures::connection(&server.url());
    connection.set_refresh_token(Some("old".to_string()));
    let response = connection.authenticate().await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 400);
    assert_eq!(connection.access_token(), None);
    assert_eq!(connection.refresh_token(), None);
    assert_eq!(connection.token_obtained_at(), None);
}

#[tokio::test]
async fn test_authenticate_with_non_json_body_clears_tokens() {
    let mut server = mockito::Server::new_async().await;
    let accepted = server
        .mock("POST", "/authenticate")
        .with_status(200)
        .with_header("x-change-password", "change-me")
        .with_body(
            json!({"access_token": "first-access", "refresh_token": "first-refresh"}).to_string(),
        )
        .create_async()
        .await;

    let mut connection = fixtures::connection(&server.url());
    connection.authenticate().await.unwrap();
    accepted.assert_async().await;
    assert_eq!(connection.access_token(), Some("first-access"));
    assert_eq!(connection.refresh_token(), Some("first-refresh"));
    assert_eq!(connection.x_change_password_token(), Some("change-me"));
    accepted.remove_async().await;

    let garbled = server
        .mock("POST", "/authenticate")
        .with_status(200)
        .with_header("x-change-password", "ignored")
        .with_body("not json")
        .create_async()
        .await;

    let response = connection.authenticate().await.unwrap();

    garbled.assert_async().await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "not json");
    assert_eq!(connection.access_token(), None);
    assert_eq!(connection.refresh_token(), None);
    assert_eq!(connection.x_change_password_token(), None);
    assert!(!connection.is_authenticated());
}

#[tokio::test]
async fn test_authenticate_with_missing_token_clears_tokens() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/authenticate")
        .with_status(200)
        .with_body(json!({"access_token": "only-access"}).to_string())
        .create_async()
        .await;

    let mut connection = fixtures::connection(&server.url());
    connection.authenticate().await.unwrap();

    mock.assert_async().await;
    assert_eq!(connection.access_token(), None);
    assert_eq!(connection.refresh_token(), None);
}

#[tokio::test]
async fn test_authenticate_requires_credentials() {
    let mut connection = Connection::builder("http://127.0.0.1:9")
        .client("client-id", "client-secret")
        .build()
        .unwrap();
    match connection.authenticate().await {
        Err(AppError::MissingField(field)) => assert_eq!(field, "username"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_authenticate_transport_failure_clears_tokens() {
    let mut connection = fixtures::connection("http://127.0.0.1:1");
    connection.set_refresh_token(Some("old".to_string()));

    let result = connection.authenticate().await;

    assert!(matches!(result, Err(AppError::Network(_))));
    assert!(!connection.is_authenticated());
    assert_eq!(connection.refresh_token(), None);
}

#[tokio::test]
async fn test_refresh_grant() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/authenticate")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "old-refresh".into()),
        ]))
        .with_status(200)
        .with_body(json!({"access_token": "new", "refresh_token": "new-refresh"}).to_string())
        .create_async()
        .await;

    let mut connection = Connection::builder(server.url())
        .client("client-id", "client-secret")
        .refresh_token("old-refresh")
        .build()
        .unwrap();
    connection.authenticate_with_refresh_token().await.unwrap();

    mock.assert_async().await;
    assert_eq!(connection.access_token(), Some("new"));
    assert_eq!(connection.refresh_token(), Some("new-refresh"));
}

#[tokio::test]
async fn test_refresh_grant_requires_a_refresh_token() {
    let mut connection = Connection::builder("http://127.0.0.1:9")
        .client("client-id", "client-secret")
        .build()
        .unwrap();
    assert!(matches!(
        connection.authenticate_with_refresh_token().await,
        Err(AppError::MissingField(_))
    ));
}

#[tokio::test]
async fn test_detect_api_version() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/about")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(json!({"installation_name": "Test", "version": "7.7.9.3"}).to_string())
        .expect(2)
        .create_async()
        .await;

    let mut connection = fixtures::connection_v3(&server.url());
    let detected = connection.detect_api_version(false).await.unwrap();
    assert_eq!(detected, ApiVersion::V4);
    assert_eq!(connection.api_version(), ApiVersion::V3);

    connection.detect_api_version(true).await.unwrap();
    assert_eq!(connection.api_version(), ApiVersion::V4);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_detect_api_version_on_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v4/about")
        .with_status(503)
        .create_async()
        .await;

    let mut connection = fixtures::connection(&server.url());
    let result = connection.detect_api_version(true).await;
    assert!(matches!(result, Err(AppError::RemoteStatus { .. })));
    assert_eq!(connection.api_version(), ApiVersion::V4);
}
