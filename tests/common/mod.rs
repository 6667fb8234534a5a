//! In-process stand-in for the remote risk API

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use rug_munch_agentkit::{ApiConfig, RugMunchActionProvider, Timeouts};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Path prefix the mock is mounted under, like the hosted `/api/agent/v1`
pub const PREFIX: &str = "/api/agent/v1";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct MockState {
    reply: Reply,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockRiskApi {
    addr: std::net::SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockRiskApi {
    /// Serve `reply` for every request on an ephemeral port
    pub async fn start(reply: Reply) -> Self {
        let state = Arc::new(MockState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, PREFIX)
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(&self.base_url()).expect("valid base url")
    }

    pub fn provider(&self) -> RugMunchActionProvider {
        RugMunchActionProvider::new(self.config()).expect("provider")
    }

    pub fn provider_with(&self, config: ApiConfig) -> RugMunchActionProvider {
        RugMunchActionProvider::new(config).expect("provider")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("lock").clone()
    }
}

impl Drop for MockRiskApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().expect("lock").push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        api_key: header("x-api-key"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).ok(),
    });

    if !state.reply.delay.is_zero() {
        tokio::time::sleep(state.reply.delay).await;
    }

    let status = StatusCode::from_u16(state.reply.status).expect("status");
    (
        status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        state.reply.body.clone(),
    )
        .into_response()
}

/// Timeouts short enough to exercise expiry in tests
pub fn short_timeouts() -> Timeouts {
    Timeouts {
        standard: Duration::from_millis(200),
        extended: Duration::from_secs(2),
    }
}
