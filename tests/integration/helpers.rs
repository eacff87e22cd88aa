//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use docshelf_api::{build_app, build_state};
use docshelf_core::config::AppConfig;

const BOUNDARY: &str = "docshelf-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create an empty application (no demo data)
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.seed.enabled = false;
        Self::with_config(config).await
    }

    /// Create an application preloaded with the demo data set
    pub async fn seeded() -> Self {
        let mut config = AppConfig::default();
        config.seed.enabled = true;
        Self::with_config(config).await
    }

    /// Create an application from an explicit configuration
    pub async fn with_config(config: AppConfig) -> Self {
        let state = build_state(config).await.expect("Failed to build state");
        Self {
            router: build_app(state),
        }
    }

    /// Send a JSON request
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        let req = match body {
            Some(body) => req.body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload a file via multipart form data
    pub async fn upload(&self, file_name: &str, content: &[u8], tag_ids: &[&str]) -> TestResponse {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
        for id in tag_ids {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"tagIds\"\r\n\r\n{id}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/api/files")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload a file and return its id, asserting success
    pub async fn upload_ok(&self, file_name: &str, tag_ids: &[&str]) -> String {
        let response = self.upload(file_name, b"content", tag_ids).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"]
            .as_str()
            .expect("id missing")
            .to_string()
    }

    /// Create a tag and return its id, asserting success
    pub async fn create_tag(&self, name: &str) -> String {
        let response = self
            .request("POST", "/api/tags", Some(json!({ "name": name })))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"]
            .as_str()
            .expect("id missing")
            .to_string()
    }

    /// Send a raw request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes: bytes.to_vec(),
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: axum::http::HeaderMap,
    /// Raw body
    pub bytes: Vec<u8>,
    /// Parsed JSON body (`Null` if not JSON)
    pub body: Value,
}

impl TestResponse {
    /// File names in a list response, in order
    pub fn file_names(&self) -> Vec<String> {
        self.body["data"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|d| d["fileName"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
