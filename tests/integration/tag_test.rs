//! Integration tests for tag management.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_list_tags() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/tags", Some(json!({ "name": "  契約書 ", "color": "secondary" })))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], "契約書");
    assert_eq!(response.body["data"]["color"], "secondary");

    app.create_tag("Archive").await;

    let list = app.request("GET", "/api/tags", None).await;
    let names: Vec<&str> = list.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Archive", "契約書"]);
}

#[tokio::test]
async fn test_create_tag_validation() {
    let app = TestApp::new().await;
    app.create_tag("Invoice").await;

    let duplicate = app
        .request("POST", "/api/tags", Some(json!({ "name": "invoice" })))
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let short = app.request("POST", "/api/tags", Some(json!({ "name": "x" }))).await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);
    assert_eq!(short.body["error"], "VALIDATION_ERROR");

    let bad_color = app
        .request("POST", "/api/tags", Some(json!({ "name": "ok tag", "color": "purple" })))
        .await;
    assert_eq!(bad_color.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_tag_updates_documents() {
    let app = TestApp::new().await;
    let tag = app.create_tag("見積書").await;
    let doc = app.upload_ok("a.pdf", &[tag.as_str()]).await;

    let response = app
        .request("PATCH", &format!("/api/tags/{tag}"), Some(json!({ "name": "見積" })))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let stored = app.request("GET", &format!("/api/files/{doc}"), None).await;
    assert_eq!(stored.body["data"]["tags"][0]["name"], "見積");

    // Search now finds the document by the new tag name.
    let found = app.request("GET", "/api/files?search=%E8%A6%8B%E7%A9%8D", None).await;
    assert_eq!(found.file_names(), vec!["a.pdf"]);
}

#[tokio::test]
async fn test_delete_tag_cascades() {
    let app = TestApp::new().await;
    let tag = app.create_tag("重要").await;
    let doc = app.upload_ok("a.pdf", &[tag.as_str()]).await;
    app.upload_ok("b.pdf", &[]).await;

    let response = app.request("DELETE", &format!("/api/tags/{tag}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["affectedDocuments"], 1);

    let stored = app.request("GET", &format!("/api/files/{doc}"), None).await;
    assert_eq!(stored.body["data"]["tags"], json!([]));

    let missing = app.request("GET", &format!("/api/tags/{tag}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_tag_is_not_found() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "PATCH",
            "/api/tags/00000000-0000-0000-0000-000000000009",
            Some(json!({ "color": "info" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
