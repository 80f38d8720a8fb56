//! 통합 테스트 공용 헬퍼
//!
//! 인메모리 SQLite에 실제 스키마를 만들고 `app(state)` 라우터를 그대로 호출합니다.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tower::ServiceExt;

use wall_server::config::{establish_connection, AppConfig};
use wall_server::domain::user::entity::user;
use wall_server::utils::jwt::encode_token;
use wall_server::{app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(AppConfig::for_test(TEST_SECRET)).await
    }

    /// 설정을 바꿔 생성 (예: 파일 DB + 다중 커넥션 풀)
    pub async fn with_config(config: AppConfig) -> Self {
        let db = establish_connection(&config).await.expect("database");
        let state = AppState { db, config };

        Self {
            router: app(state.clone()),
            state,
        }
    }

    /// 사용자 행을 만들고 (user_id, access token)을 반환
    pub async fn create_user(&self, username: &str) -> (i64, String) {
        let model = user::ActiveModel {
            username: Set(username.to_string()),
            email: Set(format!("{}@example.com", username)),
            created_on: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.state.db)
        .await
        .expect("insert user");

        let token = encode_token(model.user_id, TEST_SECRET, 3600).expect("token");
        (model.user_id, token)
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// 벽을 만들고 ID 반환
    pub async fn create_wall(&self, token: &str, title: &str, content: &str) -> i64 {
        let (status, json) = self
            .post(
                "/walls/list/",
                token,
                serde_json::json!({ "title": title, "content": content }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create wall failed: {}", json);
        json["data"]["id"].as_i64().unwrap()
    }

    /// 댓글을 만들고 ID 반환
    pub async fn create_comment(&self, token: &str, wall_id: i64, content: &str) -> i64 {
        let (status, json) = self
            .post(
                "/comment/list/",
                token,
                serde_json::json!({ "wall": wall_id, "comment_content": content }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create comment failed: {}", json);
        json["data"]["id"].as_i64().unwrap()
    }

    pub async fn wall_json(&self, wall_id: i64) -> Value {
        let (status, json) = self
            .get(&format!("/walls/details/{}/", wall_id), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        json["data"].clone()
    }
}
