//! reqwest-backed gateway to the Rug Munch agent API

use super::{GatewayRequest, RiskGateway};
use crate::config::ApiConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::{Duration, Instant};
use url::Url;

/// Returned for HTTP 402
pub const PAYMENT_REQUIRED_MESSAGE: &str =
    "Payment required (HTTP 402). Set RUG_MUNCH_API_KEY or use x402 payment.";

const API_KEY_HEADER: &str = "X-API-Key";

/// Gateway that talks to the hosted risk API over HTTPS
///
/// Holds one `reqwest::Client` so connections are pooled across calls.
/// Nothing else is shared between requests.
#[derive(Debug, Clone)]
pub struct HttpRiskGateway {
    client: Client,
    config: ApiConfig,
}

impl HttpRiskGateway {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("rug-munch-agentkit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Join the base URL with the request's path segments
    fn build_url(&self, request: &GatewayRequest) -> Result<Url> {
        let mut url = Url::parse(self.config.base_url())
            .map_err(|e| Error::Config(format!("Invalid API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }

    fn payment_required(&self, body: &str) -> Error {
        let pricing =
            pricing_hint(body).unwrap_or_else(|| format!("See {}", self.config.pricing_url()));
        Error::PaymentRequired {
            message: PAYMENT_REQUIRED_MESSAGE.to_string(),
            pricing: Some(pricing),
        }
    }
}

#[async_trait]
impl RiskGateway for HttpRiskGateway {
    async fn send(&self, request: &GatewayRequest) -> Result<Map<String, Value>> {
        let url = self.build_url(request)?;
        let path = request.path();

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(request.timeout);

        if let Some(key) = self.config.api_key() {
            builder = builder.header(API_KEY_HEADER, key);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, path = %path, "Sending risk API request");
        let start = Instant::now();

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, request.timeout))?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if status == StatusCode::PAYMENT_REQUIRED {
            tracing::info!(path = %path, latency_ms, "Risk API requires payment");
            let body = response.text().await.unwrap_or_default();
            return Err(self.payment_required(&body));
        }

        if !status.is_success() {
            tracing::warn!(
                path = %path,
                status = status.as_u16(),
                latency_ms,
                "Risk API returned an error status"
            );
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Remote {
                status: status.as_u16(),
                message: describe_status(status, &body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, request.timeout))?;

        tracing::debug!(
            path = %path,
            status = status.as_u16(),
            latency_ms,
            bytes = bytes.len(),
            "Risk API request succeeded"
        );

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| Error::Transport(format!("malformed response body: {}", e)))?;

        match body {
            Value::Object(fields) => Ok(fields),
            other => Err(Error::Transport(format!(
                "unexpected response body: expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "HttpRiskGateway"
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> Error {
    if e.is_timeout() {
        Error::Transport(format!("request timed out after {:?}", timeout))
    } else {
        Error::from(e)
    }
}

/// `pricing` from a 402 body, when the service supplies one
fn pricing_hint(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("pricing")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Status line plus the service's own message, if it sent one
fn describe_status(status: StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown Status");

    let detail = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        ["error", "detail", "message"]
            .iter()
            .find_map(|k| v.get(*k).and_then(Value::as_str).map(str::to_string))
    });

    match detail {
        Some(detail) if !detail.trim().is_empty() => format!("{} ({})", reason, detail.trim()),
        _ => reason.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
