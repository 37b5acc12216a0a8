mod common;

use axum::http::StatusCode;
use common::{build_app, test_config};

#[tokio::test]
async fn home_page_is_served_from_the_public_dir() {
    let client = build_app(&test_config("http://127.0.0.1:1"));

    let response = client.get("/").await;

    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("Facebook Login Demo"));
}

#[tokio::test]
async fn unknown_assets_are_not_found() {
    let client = build_app(&test_config("http://127.0.0.1:1"));

    let response = client.get("/no-such-asset.css").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check() {
    let client = build_app(&test_config("http://127.0.0.1:1"));

    let response = client.get("/health").await;

    response.assert_status(StatusCode::OK);
}
