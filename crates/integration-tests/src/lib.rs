//! Integration tests for Urban Brew.
//!
//! The checkout flow is exercised end-to-end against an in-process stub
//! order backend: an `axum` router bound to an ephemeral port that records
//! every request body it receives and replies with whatever the test
//! configured. No external services are required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p urban-brew-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

/// What the stub backend replies to every order it receives.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// A JSON body with the given status.
    Json(StatusCode, serde_json::Value),
    /// A raw non-JSON body, for transport-failure scenarios.
    Text(StatusCode, &'static str),
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

/// A running stub order backend.
pub struct StubBackend {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl StubBackend {
    /// Base URL to point `OrderApiConfig` at.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request body received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().expect("requests lock").clone()
    }
}

/// Start a stub backend on an ephemeral port.
///
/// The server lives on a background task for the remainder of the test
/// process; tests never need to shut it down explicitly.
pub async fn spawn_backend(reply: StubReply) -> StubBackend {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        reply,
        requests: Arc::clone(&requests),
    };

    let app = Router::new()
        .route("/place_order", post(place_order))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });

    StubBackend { addr, requests }
}

async fn place_order(State(state): State<StubState>, Json(body): Json<serde_json::Value>) -> Response {
    state.requests.lock().expect("requests lock").push(body);

    match state.reply {
        StubReply::Json(status, value) => (status, Json(value)).into_response(),
        StubReply::Text(status, text) => (status, text).into_response(),
    }
}
