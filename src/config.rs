//! Configuration for the Rug Munch API client
//!
//! Mirrors the environment conventions of the hosted service:
//!
//! ```bash
//! # Optional: point at a staging deployment
//! export RUG_MUNCH_API_BASE="https://cryptorugmunch.app/api/agent/v1"
//!
//! # Optional: without a key every call is metered through x402 payments
//! export RUG_MUNCH_API_KEY="rm_live_..."
//! ```
//!
//! The environment is read once by the entry point; the resulting
//! [`ApiConfig`] is passed explicitly into the gateway.

use crate::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const API_BASE_ENV: &str = "RUG_MUNCH_API_BASE";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "RUG_MUNCH_API_KEY";

/// Production endpoint
pub const DEFAULT_API_BASE: &str = "https://cryptorugmunch.app/api/agent/v1";

/// Per-call timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Used by every lookup and check action
    pub standard: Duration,
    /// Used by the AI forensic analysis, which routinely takes 5-30s
    pub extended: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            standard: Duration::from_secs(30),
            extended: Duration::from_secs(60),
        }
    }
}

/// Connection settings for the remote risk service
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    api_key: Option<SecretString>,
    pub timeouts: Timeouts,
}

impl ApiConfig {
    /// Create a config for `base_url` with no API key and default timeouts
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_key: None,
            timeouts: Timeouts::default(),
        })
    }

    /// Build config from `RUG_MUNCH_API_BASE` and `RUG_MUNCH_API_KEY`
    ///
    /// An unset or empty key means unauthenticated access; the remote
    /// service then answers with 402 unless the caller pays per request.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_BASE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let mut config = Self::new(&base_url)?;
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config = config.with_api_key(key);
        }

        if config.api_key.is_none() {
            tracing::debug!("No {} set, requests will be metered", API_KEY_ENV);
        }

        Ok(config)
    }

    /// Set the API key. Empty keys are ignored.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.trim().is_empty() {
            None
        } else {
            Some(SecretString::from(key.trim().to_string()))
        };
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Where callers can look up per-action pricing
    pub fn pricing_url(&self) -> String {
        format!("{}/status", self.base_url)
    }

    /// Redacted view for display
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            base_url: self.base_url.clone(),
            api_key_configured: self.has_api_key(),
            standard_timeout_secs: self.timeouts.standard.as_secs_f64(),
            extended_timeout_secs: self.timeouts.extended.as_secs_f64(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeouts: Timeouts::default(),
        }
    }
}

/// Effective configuration with the key redacted
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub base_url: String,
    pub api_key_configured: bool,
    pub standard_timeout_secs: f64,
    pub extended_timeout_secs: f64,
}

fn parse_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| Error::Config(format!("Invalid API base URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::Config(format!(
                "Unsupported API base URL scheme '{}'",
                other
            )));
        }
    }
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("API base URL '{}' cannot be a base", raw)));
    }

    Ok(trimmed.to_string())
}
