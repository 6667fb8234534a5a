//! Uniform result envelope returned to the host framework
//!
//! Every action resolves to a JSON object carrying a boolean `success` flag.
//! On success the remote body's top-level fields sit next to the flag; on
//! failure there is an `error` string and, for payment-required responses,
//! a `pricing` hint.

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedResult(Map<String, Value>);

impl NormalizedResult {
    /// Wrap a remote body. The envelope's `success` flag overrides any
    /// field of the same name in `body`.
    pub fn success(body: Map<String, Value>) -> Self {
        let mut fields = body;
        fields.insert("success".to_string(), Value::Bool(true));
        Self(fields)
    }

    pub fn failure(error: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("success".to_string(), Value::Bool(false));
        fields.insert("error".to_string(), Value::String(error.into()));
        Self(fields)
    }

    pub fn from_error(error: &Error) -> Self {
        let mut result = Self::failure(error.to_string());
        if let Error::PaymentRequired {
            pricing: Some(pricing),
            ..
        } = error
        {
            result
                .0
                .insert("pricing".to_string(), Value::String(pricing.clone()));
        }
        result
    }

    pub fn is_success(&self) -> bool {
        self.0
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Compact JSON; this is what the host hands back to the model
    pub fn to_json_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NormalizedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = Value::Object(self.0.clone());
        write!(f, "{}", value)
    }
}

impl From<crate::Result<Map<String, Value>>> for NormalizedResult {
    fn from(outcome: crate::Result<Map<String, Value>>) -> Self {
        match outcome {
            Ok(body) => Self::success(body),
            Err(e) => Self::from_error(&e),
        }
    }
}
