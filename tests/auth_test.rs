//! 인증 통합 테스트 (Bearer 헤더, access_token 쿠키)

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;

use common::{TestApp, TEST_SECRET};
use wall_server::utils::jwt::encode_token;

fn create_wall_request(auth: Option<(&'static str, String)>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/walls/list/")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some((name, value)) = auth {
        builder = builder.header(name, value);
    }
    builder
        .body(Body::from(json!({"title": "T1", "content": "C1"}).to_string()))
        .unwrap()
}

#[tokio::test]
async fn should_accept_access_token_cookie() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("alice").await;

    let (status, json) = app
        .send(create_wall_request(Some((
            "cookie",
            format!("access_token={}", token),
        ))))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["created_by"], "alice");
}

#[tokio::test]
async fn should_reject_missing_credentials() {
    let app = TestApp::new().await;

    let (status, json) = app.send(create_wall_request(None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["status"], 0);
    assert_eq!(
        json["message"],
        "Authentication credentials were not provided."
    );
}

#[tokio::test]
async fn should_reject_non_bearer_scheme() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("alice").await;

    let (status, json) = app
        .send(create_wall_request(Some((
            "authorization",
            format!("Token {}", token),
        ))))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid token format.");
}

#[tokio::test]
async fn should_reject_expired_token() {
    let app = TestApp::new().await;
    let (user_id, _) = app.create_user("alice").await;
    let expired = encode_token(user_id, TEST_SECRET, -3600).unwrap();

    let (status, json) = app
        .send(create_wall_request(Some((
            "authorization",
            format!("Bearer {}", expired),
        ))))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Token has expired.");
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let app = TestApp::new().await;
    let (user_id, _) = app.create_user("alice").await;
    let forged = encode_token(user_id, "another-secret", 3600).unwrap();

    let (status, json) = app
        .send(create_wall_request(Some((
            "authorization",
            format!("Bearer {}", forged),
        ))))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid token.");
}

#[tokio::test]
async fn should_reject_token_for_unknown_user() {
    let app = TestApp::new().await;
    let ghost = encode_token(424242, TEST_SECRET, 3600).unwrap();

    let (status, json) = app
        .send(create_wall_request(Some((
            "authorization",
            format!("Bearer {}", ghost),
        ))))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "User not found.");
}
