#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use filmstore_api::config::{LogFormat, ServerConfig};
use filmstore_api::router::build_app_router;
use filmstore_api::state::AppState;

/// Build a test `ServerConfig` pointing at `data_path`.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(data_path: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_path: data_path.to_path_buf(),
        log_format: LogFormat::Text,
    }
}

/// Test fixture: a temporary directory holding the film document.
///
/// Keep the fixture alive for the whole test; dropping it removes the file.
pub struct TestStore {
    pub dir: TempDir,
}

impl TestStore {
    /// An empty directory; the document does not exist yet.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// The three films shipped with the service.
    pub fn seeded() -> Self {
        let store = Self::empty();
        store.write_raw(
            r#"[
  { "id": 1, "title": "Inception", "director": "Christopher Nolan", "duration": 148 },
  { "id": 2, "title": "The Godfather", "director": "Francis Ford Coppola", "duration": 175 },
  { "id": 3, "title": "Pulp Fiction", "director": "Quentin Tarantino", "duration": 154 }
]"#,
        );
        store
    }

    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join("films.json")
    }

    pub fn write_raw(&self, contents: &str) {
        std::fs::write(self.path(), contents).unwrap();
    }

    /// Parsed contents of the document as it is on disk.
    pub fn read_json(&self) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(self.path()).unwrap()).unwrap()
    }

    /// Build the full application router over this store.
    ///
    /// Uses the same `build_app_router` as `main.rs`, so tests exercise the
    /// production middleware stack (CORS, request ID, timeout, tracing,
    /// panic recovery, request counter).
    pub fn app(&self) -> Router {
        build_app_router(AppState::new(test_config(&self.path())))
    }
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect the response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
