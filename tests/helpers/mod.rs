//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use explorer_api::{AppState, build_app};
use explorer_core::config::AppConfig;
use explorer_core::events::ExplorerEvent;
use explorer_core::traits::RecordingReporter;
use explorer_core::types::RootSpec;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Captures failures the services absorb
    pub reporter: RecordingReporter,
    /// Directory served as the single root
    pub root: TempDir,
    /// Directory holding the explorer page
    pub static_dir: TempDir,
}

impl TestApp {
    /// Create a test application serving a small fixture tree:
    ///
    /// ```text
    /// README.md
    /// node_modules/dep.js
    /// src/lib.rs
    /// src/nested/deep.txt
    /// zeta/
    /// ```
    pub async fn new() -> Self {
        Self::with_config(|_, _| {}).await
    }

    /// Like [`TestApp::new`], with a chance to adjust configuration before
    /// state is built. The fixture root is already in `explorer.roots[0]`.
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig, &Path)) -> Self {
        let root = tempfile::tempdir().expect("Failed to create root dir");
        populate_fixture(root.path());

        let static_dir = tempfile::tempdir().expect("Failed to create static dir");
        std::fs::write(
            static_dir.path().join("file-explorer.html"),
            "<!DOCTYPE html><html><body>explorer</body></html>",
        )
        .expect("Failed to write explorer page");

        let mut config = AppConfig::default();
        config.server.static_dir = static_dir.path().to_string_lossy().into_owned();
        config.explorer.roots = vec![
            RootSpec::new(root.path().to_string_lossy())
                .with_label("@root")
                .ignoring(["node_modules"]),
        ];
        adjust(&mut config, root.path());

        let reporter = RecordingReporter::new();
        let state = AppState::new(config.clone(), Arc::new(reporter.clone()));
        let router = build_app(state, &config.server.cors);

        Self {
            router,
            config,
            reporter,
            root,
            static_dir,
        }
    }

    /// Absolute path of a fixture file, as a string.
    pub fn path_of(&self, relative: &str) -> String {
        self.root.path().join(relative).to_string_lossy().into_owned()
    }

    /// Write an extra file under the fixture root and return its path.
    pub fn write_file(&self, relative: &str, contents: &[u8]) -> String {
        let path = self.root.path().join(relative);
        std::fs::write(&path, contents).expect("Failed to write file");
        path.to_string_lossy().into_owned()
    }

    /// The URI reading `path` through `GET /files`.
    pub fn content_uri(&self, path: &str, content_type: Option<&str>) -> String {
        let mut uri = format!("/files?file_path={}", encode_query_value(path));
        if let Some(content_type) = content_type {
            uri.push_str("&content_type=");
            uri.push_str(content_type);
        }
        uri
    }

    /// Make a GET request to the test app
    pub async fn get(&self, uri: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }

    /// Events reported so far.
    pub fn events(&self) -> Vec<ExplorerEvent> {
        self.reporter.events()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
    /// Raw body text
    pub text: String,
}

fn populate_fixture(root: &Path) {
    let files: [(PathBuf, &str); 4] = [
        (root.join("README.md"), "# Fixture <readme>\n"),
        (root.join("node_modules").join("dep.js"), "module.exports = {};"),
        (root.join("src").join("lib.rs"), "pub fn answer() -> u32 { 42 }\n"),
        (root.join("src").join("nested").join("deep.txt"), "deep"),
    ];
    for (path, contents) in files {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        std::fs::write(&path, contents).expect("Failed to write fixture file");
    }
    std::fs::create_dir_all(root.join("zeta")).expect("Failed to create fixture dir");
}

/// Everything outside the RFC 3986 unreserved set, except `/`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
