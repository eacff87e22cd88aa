//! Integration tests for document listing, upload, download and edits.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;

use docshelf_core::config::AppConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_upload_then_list() {
    let app = TestApp::new().await;
    let response = app.upload("見積書_2024.xlsx", &[0u8; 1536], &[]).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let doc = &response.body["data"];
    assert_eq!(doc["fileName"], "見積書_2024.xlsx");
    assert_eq!(doc["fileSize"], 1536);
    assert_eq!(doc["fileFormat"], "xlsx");
    assert_eq!(doc["fileSizeLabel"], "1.5 KB");
    assert_eq!(doc["isDeleted"], false);
    assert!(doc["deletedAt"].is_null());

    let list = app.request("GET", "/api/files", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.file_names(), vec!["見積書_2024.xlsx"]);
    assert_eq!(
        list.body["pagination"],
        json!({ "page": 1, "limit": 20, "total": 1, "totalPages": 1 })
    );
}

#[tokio::test]
async fn test_empty_list() {
    let app = TestApp::new().await;
    let list = app.request("GET", "/api/files", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["data"], json!([]));
    assert_eq!(list.body["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn test_upload_duplicate_name_conflicts() {
    let app = TestApp::new().await;
    app.upload_ok("a.pdf", &[]).await;
    let response = app.upload("a.pdf", b"again", &[]).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_upload_disallowed_extension() {
    let app = TestApp::new().await;
    let response = app.upload("tool.exe", b"MZ", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_too_large() {
    let mut config = AppConfig::default();
    config.seed.enabled = false;
    config.upload.max_file_size_bytes = 16;
    let app = TestApp::with_config(config).await;

    let response = app.upload("big.txt", &[b'x'; 32], &[]).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = TestApp::new().await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/files")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=b")
        .body(Body::from("--b--\r\n"))
        .unwrap();
    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_with_unknown_tag() {
    let app = TestApp::new().await;
    let response = app
        .upload("a.pdf", b"1", &["00000000-0000-0000-0000-000000000001"])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tag_filter_requires_all_tags() {
    let app = TestApp::new().await;
    let invoice = app.create_tag("請求書").await;
    let important = app.create_tag("重要").await;
    app.upload_ok("請求書_A.pdf", &[invoice.as_str()]).await;
    app.upload_ok("請求書_B.pdf", &[invoice.as_str(), important.as_str()]).await;
    app.upload_ok("契約書_C.docx", &[]).await;

    let one = app
        .request("GET", &format!("/api/files?tagIds={invoice}&sortBy=fileName&sortOrder=asc"), None)
        .await;
    assert_eq!(one.file_names(), vec!["請求書_A.pdf", "請求書_B.pdf"]);

    let both = app
        .request("GET", &format!("/api/files?tagIds={invoice}&tagIds={important}"), None)
        .await;
    assert_eq!(both.file_names(), vec!["請求書_B.pdf"]);
    assert_eq!(both.body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_malformed_tag_id_is_rejected() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/files?tagIds=not-a-uuid", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_search_matches_all_tokens_and_highlights() {
    let app = TestApp::new().await;
    app.upload_ok("田中商事_請求書_202401.pdf", &[]).await;
    app.upload_ok("田中商事_見積書.pdf", &[]).await;

    let query = "search=%E7%94%B0%E4%B8%AD%E5%95%86%E4%BA%8B%20%E8%AB%8B%E6%B1%82%E6%9B%B8";
    let response = app.request("GET", &format!("/api/files?{query}"), None).await;

    assert_eq!(response.file_names(), vec!["田中商事_請求書_202401.pdf"]);
    let segments = response.body["data"][0]["fileNameHighlights"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(segments[0], json!({ "text": "田中商事", "matched": true }));
    assert_eq!(segments[1], json!({ "text": "_", "matched": false }));
    assert_eq!(segments[2], json!({ "text": "請求書", "matched": true }));
}

#[tokio::test]
async fn test_pagination() {
    let app = TestApp::new().await;
    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        app.upload_ok(name, &[]).await;
    }

    let first = app.request("GET", "/api/files?page=1&limit=2", None).await;
    assert_eq!(first.file_names().len(), 2);
    assert_eq!(
        first.body["pagination"],
        json!({ "page": 1, "limit": 2, "total": 3, "totalPages": 2 })
    );

    let second = app.request("GET", "/api/files?page=2&limit=2", None).await;
    assert_eq!(second.file_names().len(), 1);

    let beyond = app.request("GET", "/api/files?page=5&limit=20", None).await;
    assert_eq!(beyond.status, StatusCode::OK);
    assert_eq!(beyond.body["data"], json!([]));
    assert_eq!(beyond.body["pagination"]["total"], 3);
}

#[tokio::test]
async fn test_invalid_paging_and_sort_values_fall_back() {
    let app = TestApp::new().await;
    app.upload_ok("a.pdf", &[]).await;

    let response = app
        .request("GET", "/api/files?page=abc&limit=0&sortBy=color&sortOrder=up", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["pagination"]["page"], 1);
    assert_eq!(response.body["pagination"]["limit"], 20);

    let capped = app.request("GET", "/api/files?limit=5000", None).await;
    assert_eq!(capped.body["pagination"]["limit"], 100);
}

#[tokio::test]
async fn test_sort_by_size_ascending() {
    let app = TestApp::new().await;
    app.upload("x.txt", &[b'x'; 300], &[]).await;
    app.upload("y.txt", &[b'y'; 100], &[]).await;
    app.upload("z.txt", &[b'z'; 200], &[]).await;

    let response = app
        .request("GET", "/api/files?sortBy=fileSize&sortOrder=asc", None)
        .await;
    assert_eq!(response.file_names(), vec!["y.txt", "z.txt", "x.txt"]);
}

#[tokio::test]
async fn test_get_document() {
    let app = TestApp::new().await;
    let id = app.upload_ok("a.pdf", &[]).await;

    let response = app.request("GET", &format!("/api/files/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], id.as_str());

    let missing = app
        .request("GET", "/api/files/00000000-0000-0000-0000-999999999999", None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");

    let malformed = app.request("GET", "/api/files/xyz", None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_download_returns_bytes() {
    let app = TestApp::new().await;
    let response = app.upload("memo.txt", b"hello docshelf", &[]).await;
    let id = response.body["data"]["id"].as_str().unwrap().to_string();

    let download = app
        .request("GET", &format!("/api/files/{id}/download"), None)
        .await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(download.bytes, b"hello docshelf");
    let disposition = download.headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"memo.txt\""));
}

#[tokio::test]
async fn test_patch_renames_and_retags() {
    let app = TestApp::new().await;
    let tag = app.create_tag("重要").await;
    let id = app.upload_ok("a.pdf", &[]).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/files/{id}"),
            Some(json!({ "fileName": "b.pdf", "tagIds": [tag] })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["fileName"], "b.pdf");
    assert_eq!(response.body["data"]["tags"][0]["name"], "重要");
}

#[tokio::test]
async fn test_patch_rename_updates_format() {
    let app = TestApp::new().await;
    let id = app.upload_ok("draft.txt", &[]).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/files/{id}"),
            Some(json!({ "fileName": "draft.csv" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["fileFormat"], "csv");
    assert_eq!(response.body["data"]["fileCategory"], "spreadsheet");

    let download = app
        .request("GET", &format!("/api/files/{id}/download"), None)
        .await;
    assert_eq!(download.headers[header::CONTENT_TYPE], "text/csv");
}

#[tokio::test]
async fn test_patch_validation_errors() {
    let app = TestApp::new().await;
    app.upload_ok("taken.pdf", &[]).await;
    let id = app.upload_ok("a.pdf", &[]).await;
    let path = format!("/api/files/{id}");

    let duplicate = app
        .request("PATCH", &path, Some(json!({ "fileName": "taken.pdf" })))
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let empty = app.request("PATCH", &path, Some(json!({ "fileName": "  " }))).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let executable = app
        .request("PATCH", &path, Some(json!({ "fileName": "a.exe" })))
        .await;
    assert_eq!(executable.status, StatusCode::BAD_REQUEST);
    let unchanged = app.request("GET", &path, None).await;
    assert_eq!(unchanged.body["data"]["fileName"], "a.pdf");
    assert_eq!(unchanged.body["data"]["fileFormat"], "pdf");

    let bad_tag = app
        .request("PATCH", &path, Some(json!({ "tagIds": ["nope"] })))
        .await;
    assert_eq!(bad_tag.status, StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .method("PATCH")
        .uri(&path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let malformed = app.send(req).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_acting_user_header() {
    let app = TestApp::new().await;
    let user = "5b0c1f4e-8d1a-4c53-9a8e-0f6c2e7d9b11";

    let mut body = Vec::new();
    body.extend_from_slice(
        b"--b\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.pdf\"\r\n\r\nx\r\n--b--\r\n",
    );
    let req = Request::builder()
        .method("POST")
        .uri("/api/files")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=b")
        .header("X-User-Id", user)
        .body(Body::from(body))
        .unwrap();
    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["uploadedByUserId"], user);

    let req = Request::builder()
        .method("POST")
        .uri("/api/tags")
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-User-Id", "bogus")
        .body(Body::from(json!({ "name": "重要な" }).to_string()))
        .unwrap();
    let rejected = app.send(req).await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_seeded_collection() {
    let app = TestApp::seeded().await;

    let active = app.request("GET", "/api/files", None).await;
    assert_eq!(active.status, StatusCode::OK);
    assert_eq!(active.body["pagination"]["total"], 7);

    let trashed = app.request("GET", "/api/files?isDeleted=true", None).await;
    assert_eq!(trashed.file_names(), vec!["旧_見積書_2023.pdf"]);

    let tags = app.request("GET", "/api/tags", None).await;
    assert_eq!(tags.body["data"].as_array().unwrap().len(), 5);
}
