//! Integration tests for the trash lifecycle: soft delete, restore, purge.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_soft_delete_moves_to_trash() {
    let app = TestApp::new().await;
    let id = app.upload_ok("a.pdf", &[]).await;
    app.upload_ok("b.pdf", &[]).await;

    let response = app.request("DELETE", &format!("/api/files/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isDeleted"], true);
    assert!(response.body["data"]["deletedAt"].is_string());

    let active = app.request("GET", "/api/files", None).await;
    assert_eq!(active.file_names(), vec!["b.pdf"]);

    let trash = app.request("GET", "/api/files?isDeleted=true", None).await;
    assert_eq!(trash.file_names(), vec!["a.pdf"]);
    assert_eq!(trash.body["pagination"]["total"], 1);

    let again = app.request("DELETE", &format!("/api/files/{id}"), None).await;
    assert_eq!(again.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_trash_view_supports_search() {
    let app = TestApp::new().await;
    for name in ["memo.txt", "report.pdf"] {
        let id = app.upload_ok(name, &[]).await;
        app.request("DELETE", &format!("/api/files/{id}"), None).await;
    }

    let response = app
        .request("GET", "/api/files?isDeleted=true&search=REPORT", None)
        .await;
    assert_eq!(response.file_names(), vec!["report.pdf"]);
}

#[tokio::test]
async fn test_trashed_document_cannot_be_edited() {
    let app = TestApp::new().await;
    let id = app.upload_ok("a.pdf", &[]).await;
    app.request("DELETE", &format!("/api/files/{id}"), None).await;

    let response = app
        .request("PATCH", &format!("/api/files/{id}"), Some(json!({ "fileName": "b.pdf" })))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_restore() {
    let app = TestApp::new().await;
    let id = app.upload_ok("a.pdf", &[]).await;

    let not_trashed = app
        .request("POST", &format!("/api/files/{id}/restore"), None)
        .await;
    assert_eq!(not_trashed.status, StatusCode::CONFLICT);

    app.request("DELETE", &format!("/api/files/{id}"), None).await;
    let restored = app
        .request("POST", &format!("/api/files/{id}/restore"), None)
        .await;
    assert_eq!(restored.status, StatusCode::OK);
    assert_eq!(restored.body["data"]["isDeleted"], false);
    assert!(restored.body["data"]["deletedAt"].is_null());

    let active = app.request("GET", "/api/files", None).await;
    assert_eq!(active.file_names(), vec!["a.pdf"]);
}

#[tokio::test]
async fn test_restore_into_name_collision() {
    let app = TestApp::new().await;
    let id = app.upload_ok("a.pdf", &[]).await;
    app.request("DELETE", &format!("/api/files/{id}"), None).await;
    app.upload_ok("a.pdf", &[]).await;

    let response = app
        .request("POST", &format!("/api/files/{id}/restore"), None)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_permanent_delete() {
    let app = TestApp::new().await;
    let id = app.upload_ok("a.pdf", &[]).await;
    let purge = format!("/api/files/{id}/permanent");

    let active = app.request("DELETE", &purge, None).await;
    assert_eq!(active.status, StatusCode::CONFLICT);

    app.request("DELETE", &format!("/api/files/{id}"), None).await;
    let purged = app.request("DELETE", &purge, None).await;
    assert_eq!(purged.status, StatusCode::NO_CONTENT);

    let gone = app.request("GET", &format!("/api/files/{id}"), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let trash = app.request("GET", "/api/files?isDeleted=true", None).await;
    assert_eq!(trash.body["pagination"]["total"], 0);
}
