#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use taskboard_api::config::ServerConfig;
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;
use taskboard_db::JsonStore;

/// A router backed by a dataset file in its own temp directory.
///
/// The directory lives as long as the `TestApp`.
pub struct TestApp {
    router: Router,
    pub store: Arc<JsonStore>,
    pub data_file: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    /// A fresh clone of the router, ready for one `oneshot` call.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(data_file: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        public_url: "http://localhost:5000".to_string(),
        data_file,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: 1024 * 1024,
    }
}

/// Build the full application router on an empty dataset.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub async fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_file = dir.path().join("data.json");
    let config = test_config(data_file.clone());

    let store = Arc::new(
        taskboard_db::open_store(&data_file)
            .await
            .expect("Failed to open dataset"),
    );
    let state = AppState {
        store: Arc::clone(&store),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        data_file,
        _dir: dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("Request failed")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PATCH, uri, body).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a project through the API and return its id.
pub async fn create_project(test: &TestApp, name: &str) -> String {
    let response = post_json(
        test.app(),
        "/api/projects",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"]
        .as_str()
        .expect("id must be a string")
        .to_string()
}

/// Create a task through the API and return the created task JSON.
pub async fn create_task(
    test: &TestApp,
    project_id: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response = post_json(
        test.app(),
        &format!("/api/projects/{project_id}/tasks"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
