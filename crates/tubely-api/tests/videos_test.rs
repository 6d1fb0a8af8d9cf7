//! Video draft API integration tests.
//!
//! Run with: `cargo test -p tubely-api --test videos_test`

mod helpers;

use axum::http::StatusCode;
use helpers::storage::TEST_BUCKET;
use helpers::{api_path, setup_test_app, TestUser};
use serde_json::json;
use tubely_core::models::Video;
use uuid::Uuid;

#[tokio::test]
async fn health_check_needs_no_token() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/healthz")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/openapi.json")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/api/video_upload/{videoID}"].is_object());
}

#[tokio::test]
async fn create_and_list_drafts() {
    let app = setup_test_app().await;
    let user = TestUser::new();

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", user.bearer())
        .json(&json!({ "title": "Boots", "description": "Fall catalog" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Video = response.json();
    assert_eq!(created.user_id, user.user_id);
    assert_eq!(created.title, "Boots");
    assert!(created.video_url.is_none());

    // Someone else's draft never shows up in the caller's list
    app.videos.seed(Uuid::new_v4());

    let response = app
        .client()
        .get(&api_path("/videos"))
        .add_header("Authorization", user.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let videos: Vec<Video> = response.json();
    assert_eq!(videos, vec![created]);
}

#[tokio::test]
async fn create_requires_a_title() {
    let app = setup_test_app().await;
    let user = TestUser::new();

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", user.bearer())
        .json(&json!({ "title": "  " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", user.bearer())
        .json(&json!({ "description": "no title" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn get_resolves_stored_reference() {
    let app = setup_test_app().await;
    let user = TestUser::new();
    let mut video = app.videos.seed(user.user_id);
    video.video_url = Some(format!("{},portrait/abc.mp4", TEST_BUCKET));
    app.videos.add_video(video.clone());

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", video.id)))
        .add_header("Authorization", user.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: Video = response.json();
    assert_eq!(
        fetched.video_url.as_deref(),
        Some("https://signed.example/portrait/abc.mp4?expires_in=900")
    );
}

#[tokio::test]
async fn malformed_reference_is_a_server_error() {
    let app = setup_test_app().await;
    let user = TestUser::new();
    let mut video = app.videos.seed(user.user_id);
    video.video_url = Some("no-comma-here".to_string());
    app.videos.add_video(video.clone());

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", video.id)))
        .add_header("Authorization", user.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "SIGNING_ERROR");
}

#[tokio::test]
async fn get_unknown_video_is_not_found() {
    let app = setup_test_app().await;
    let user = TestUser::new();

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", Uuid::new_v4())))
        .add_header("Authorization", user.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn draft_endpoints_require_auth() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/videos")).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
