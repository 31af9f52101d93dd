//! Fake database server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /database.json`: the configured document (replaceable)
//! - `GET /site/database.json`: the same document under a sub-path
//! - `GET /broken.json`: `500 Internal Server Error`
//! - `GET /missing.json`: `404 Not Found`
//! - `GET /slow.json`: the document after a two second delay
//! - `GET /old.json`: `301 Moved Permanently` to `/database.json`
//! - `GET /loop.json`: `302 Found` back to itself, forever
//!
//! Every request's cache headers are recorded so tests can check that the
//! client asked for a fresh copy.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Cache-related headers seen on one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenRequest {
    pub path: String,
    pub cache_control: Option<String>,
    pub pragma: Option<String>,
}

#[derive(Default)]
struct ApiState {
    body: String,
    requests: Vec<SeenRequest>,
}

type Shared = Arc<Mutex<ApiState>>;

/// Handle to the running fake database server.
pub struct FakeDatabaseApi {
    addr: SocketAddr,
    state: Shared,
}

impl FakeDatabaseApi {
    /// Start the server on a random port, serving `body` as the document.
    pub async fn start(body: &str) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state: Shared = Arc::new(Mutex::new(ApiState {
            body: body.to_string(),
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/database.json", get(database))
            .route("/site/database.json", get(database))
            .route("/broken.json", get(broken))
            .route("/missing.json", get(missing))
            .route("/slow.json", get(slow))
            .route("/old.json", get(moved))
            .route("/loop.json", get(looping))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the server (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Replace the served document.
    pub async fn set_body(&self, body: &str) {
        self.state.lock().await.body = body.to_string();
    }

    /// Requests seen so far, in arrival order.
    pub async fn requests(&self) -> Vec<SeenRequest> {
        self.state.lock().await.requests.clone()
    }
}

async fn record(state: &Shared, path: &str, headers: &HeaderMap) {
    let text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.lock().await.requests.push(SeenRequest {
        path: path.to_string(),
        cache_control: text(header::CACHE_CONTROL),
        pragma: text(header::PRAGMA),
    });
}

async fn database(State(state): State<Shared>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    record(&state, uri.path(), &headers).await;
    let body = state.lock().await.body.clone();
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn broken(State(state): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    record(&state, "/broken.json", &headers).await;
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn missing(State(state): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    record(&state, "/missing.json", &headers).await;
    (StatusCode::NOT_FOUND, "not here")
}

async fn slow(State(state): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    record(&state, "/slow.json", &headers).await;
    tokio::time::sleep(Duration::from_secs(2)).await;
    let body = state.lock().await.body.clone();
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn moved(State(state): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    record(&state, "/old.json", &headers).await;
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/database.json")])
}

async fn looping(State(state): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    record(&state, "/loop.json", &headers).await;
    (StatusCode::FOUND, [(header::LOCATION, "loop.json")])
}
