//! Test harness that drives the full router in-process.
//!
//! External collaborators are replaced by the mocks in
//! `event_intel::kernel::test_dependencies`, pacing is disabled and the
//! frontend directory lives in a temp dir owned by the harness.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use event_intel::domains::engagement::Pacing;
use event_intel::kernel::TestDependencies;
use event_intel::server::build_app;
use serde_json::Value;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Response captured from a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Test harness owning the router and the mocks behind it.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let resp = ctx.get("/api/health").await;
///     // ... assertions
/// }
/// ```
pub struct TestHarness {
    /// Mocks shared with the router - inspect recorded calls through these.
    pub deps: TestDependencies,
    /// Directory the router serves the frontend from
    pub frontend_dir: PathBuf,
    router: Router,
    _tmp: TempDir,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new(TestDependencies::new())
    }

    async fn teardown(self) {
        // Temp dir is removed on drop
    }
}

impl TestHarness {
    /// Harness without a frontend directory
    pub fn new(deps: TestDependencies) -> Self {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let frontend_dir = tmp.path().join("frontend");
        Self::build(deps, tmp, frontend_dir)
    }

    /// Harness with a frontend directory holding `files` (relative path, contents)
    pub fn with_frontend(files: &[(&str, &str)]) -> Self {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let frontend_dir = tmp.path().join("frontend");
        std::fs::create_dir_all(&frontend_dir).expect("Failed to create frontend dir");

        for (path, contents) in files {
            let target = frontend_dir.join(path);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create asset dir");
            }
            std::fs::write(target, contents).expect("Failed to write asset");
        }

        Self::build(TestDependencies::new(), tmp, frontend_dir)
    }

    fn build(deps: TestDependencies, tmp: TempDir, frontend_dir: PathBuf) -> Self {
        // Uses try_init() to avoid panicking if already initialized.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let router = build_app(deps.server_deps(), Pacing::none(), frontend_dir.clone());

        Self {
            deps,
            frontend_dir,
            router,
            _tmp: tmp,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.post_raw(path, body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, body: impl Into<String>) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .expect("Failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse {
            status,
            content_type,
            body,
        }
    }
}
