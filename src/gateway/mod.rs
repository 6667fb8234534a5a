//! Gateway to the remote risk service
//!
//! [`RiskGateway`] abstracts the single outbound call each action makes.
//! [`HttpRiskGateway`] is the production implementation; tests substitute
//! their own to observe requests without touching the network.
//!
//! A gateway never panics and never lets a transport failure escape as
//! anything other than an [`Error`](crate::Error) value, which the provided
//! [`RiskGateway::request`] folds into a [`NormalizedResult`].

mod http;

pub use http::{HttpRiskGateway, PAYMENT_REQUIRED_MESSAGE};

use crate::envelope::NormalizedResult;
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// One outbound call, built from validated input only
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    pub method: HttpMethod,
    /// Path segments below the base URL; each is percent-encoded on send
    pub segments: Vec<String>,
    pub body: Option<Value>,
    pub timeout: Duration,
}

impl GatewayRequest {
    pub fn get<I, S>(segments: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: HttpMethod::Get,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
            timeout,
        }
    }

    pub fn post<B: Serialize>(endpoint: &str, body: &B, timeout: Duration) -> Result<Self> {
        Ok(Self {
            method: HttpMethod::Post,
            segments: vec![endpoint.to_string()],
            body: Some(serde_json::to_value(body)?),
            timeout,
        })
    }

    /// Rendered path, e.g. `/deployer/9xQe...`
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Body field lookup, mostly for assertions and logging
    pub fn body_field(&self, field: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|b| b.get(field))
    }
}

/// Trait for risk service gateway implementations
#[async_trait]
pub trait RiskGateway: Send + Sync {
    /// Perform the call and return the remote JSON object
    ///
    /// # Errors
    /// - `Error::PaymentRequired` for HTTP 402
    /// - `Error::Remote` for any other non-2xx status
    /// - `Error::Transport` for timeouts, connection failures and bodies
    ///   that are not a JSON object
    async fn send(&self, request: &GatewayRequest) -> Result<Map<String, Value>>;

    /// Perform the call and fold every outcome into a [`NormalizedResult`]
    async fn request(&self, request: &GatewayRequest) -> NormalizedResult {
        NormalizedResult::from(self.send(request).await)
    }

    /// Gateway name for logging
    fn name(&self) -> &'static str;
}
