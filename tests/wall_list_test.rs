//! 벽 목록 통합 테스트
//!
//! 테스트 대상:
//! - GET /walls/list/?page&page_size&sort_by&order&search

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::TestApp;

fn titles(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["title"].as_str().unwrap().to_string())
        .collect()
}

async fn app_with_walls(titles: &[&str]) -> (TestApp, String) {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("alice").await;
    for title in titles {
        app.create_wall(&token, title, "content").await;
    }
    (app, token)
}

async fn app_with_numbered_walls(count: usize) -> TestApp {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("alice").await;
    for i in 0..count {
        app.create_wall(&token, &format!("wall {:02}", i), "content")
            .await;
    }
    app
}

// ============== 페이지네이션 ==============

#[tokio::test]
async fn first_page_of_fifteen_should_have_next_only() {
    // Arrange
    let app = app_with_numbered_walls(15).await;

    // Act
    let (status, json) = app.get("/walls/list/?page=1&page_size=10", None).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], 1);
    assert_eq!(json["message"], "All walls retrieved successfully.");
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
    assert_eq!(json["count"], 15);
    assert_eq!(json["total_page"], 2);
    assert_eq!(json["next"], true);
    assert_eq!(json["previous"], false);
}

#[tokio::test]
async fn second_page_of_fifteen_should_have_previous_only() {
    let app = app_with_numbered_walls(15).await;

    let (status, json) = app.get("/walls/list/?page=2&page_size=10", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
    assert_eq!(json["next"], false);
    assert_eq!(json["previous"], true);
}

#[tokio::test]
async fn pages_should_not_overlap() {
    let app = app_with_numbered_walls(15).await;

    let (_, first) = app.get("/walls/list/?page=1&page_size=10", None).await;
    let (_, second) = app.get("/walls/list/?page=2&page_size=10", None).await;

    let mut all = titles(&first);
    all.extend(titles(&second));
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 15);
}

#[tokio::test]
async fn default_page_size_should_be_ten() {
    let app = app_with_numbered_walls(12).await;

    let (_, json) = app.get("/walls/list/", None).await;

    assert_eq!(json["data"].as_array().unwrap().len(), 10);
    assert_eq!(json["total_page"], 2);
}

#[tokio::test]
async fn empty_list_should_have_single_empty_page() {
    let app = TestApp::new().await;

    let (status, json) = app.get("/walls/list/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["count"], 0);
    assert_eq!(json["total_page"], 1);
    assert_eq!(json["next"], false);
    assert_eq!(json["previous"], false);
}

#[tokio::test]
async fn page_past_the_end_should_return_400() {
    let app = app_with_numbered_walls(3).await;

    let (status, json) = app.get("/walls/list/?page=2&page_size=10", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 0);
    assert_eq!(json["message"], "Invalid page.");
}

#[tokio::test]
async fn invalid_page_parameters_should_return_400() {
    let app = app_with_numbered_walls(1).await;

    for uri in [
        "/walls/list/?page=0",
        "/walls/list/?page=-1",
        "/walls/list/?page_size=0",
        "/walls/list/?page_size=101",
        "/walls/list/?page=abc",
    ] {
        let (status, json) = app.get(uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert_eq!(json["status"], 0, "uri {}", uri);
    }
}

// ============== 정렬 ==============

#[tokio::test]
async fn default_order_should_be_newest_first() {
    let (app, _) = app_with_walls(&["first", "second", "third"]).await;

    let (_, json) = app.get("/walls/list/", None).await;

    assert_eq!(titles(&json), vec!["third", "second", "first"]);
}

#[tokio::test]
async fn sort_by_title_ascending() {
    let (app, _) = app_with_walls(&["banana", "Apple", "Apricot"]).await;

    let (status, json) = app
        .get("/walls/list/?sort_by=title&order=asc", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["Apple", "Apricot", "banana"]);
}

#[tokio::test]
async fn non_desc_order_should_sort_ascending() {
    let (app, _) = app_with_walls(&["first", "second"]).await;

    let (_, json) = app.get("/walls/list/?order=whatever", None).await;

    assert_eq!(titles(&json), vec!["first", "second"]);
}

#[tokio::test]
async fn unknown_sort_field_should_return_400() {
    let (app, _) = app_with_walls(&["first"]).await;

    let (status, json) = app.get("/walls/list/?sort_by=password", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 0);
}

// ============== 검색 ==============

#[tokio::test]
async fn search_should_match_title_case_insensitively() {
    // Arrange
    let (app, _) = app_with_walls(&["Apple", "banana", "Apricot"]).await;

    // Act
    let (status, json) = app.get("/walls/list/?search=ap", None).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["Apricot", "Apple"]);
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn search_should_treat_wildcards_literally() {
    let (app, _) = app_with_walls(&["100% done", "plain"]).await;

    let (_, json) = app.get("/walls/list/?search=%25", None).await;

    assert_eq!(titles(&json), vec!["100% done"]);
}

#[tokio::test]
async fn search_with_non_ascii_capital_should_match_same_capital() {
    let (app, _) = app_with_walls(&["École", "plain"]).await;

    // "É"
    let (status, json) = app.get("/walls/list/?search=%C3%89", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["École"]);
}

#[tokio::test]
async fn blank_search_should_return_everything() {
    let (app, _) = app_with_walls(&["one", "two"]).await;

    let (_, json) = app.get("/walls/list/?search=%20%20", None).await;

    assert_eq!(json["count"], 2);
}

// ============== 직렬화 ==============

#[tokio::test]
async fn listed_walls_should_include_counts_and_comments() {
    let (app, token) = app_with_walls(&["T1"]).await;
    let (_, list) = app.get("/walls/list/", None).await;
    let wall_id = list["data"][0]["id"].as_i64().unwrap();
    app.create_comment(&token, wall_id, "hello").await;
    app.get(&format!("/likes/{}/", wall_id), Some(&token)).await;

    let (_, json) = app.get("/walls/list/", None).await;

    let wall = &json["data"][0];
    assert_eq!(wall["likes"], 1);
    assert_eq!(wall["dis_likes"], 0);
    assert_eq!(wall["comments"][0]["comment_content"], "hello");
    assert_eq!(wall["comments"][0]["created_by"], "alice");
}
