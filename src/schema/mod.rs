//! Input schemas and argument validation
//!
//! Each action accepts a loosely-typed JSON object from the host framework.
//! Validation turns that object into a typed input (filling defaults) or a
//! [`ValidationError`] before any request is built. Validation is pure: it
//! only reads the caller's value.

mod inputs;

pub use inputs::{
    CheckBatchSchema, CheckRiskSchema, DeployerCheckSchema, MarcusQuickSchema,
    TokenAddressSchema, WatchTokenSchema, WatchType, DEFAULT_CHAIN,
};

use schemars::JsonSchema;
use serde_json::{Map, Value};
use thiserror::Error;

/// Rejected caller input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("arguments must be a JSON object")]
    NotAnObject,

    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("'{field}' must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("'{field}' is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// A typed action input that can be validated from raw JSON
pub trait InputSchema: JsonSchema + Sized {
    /// Validate `args`, applying defaults for absent optional fields
    fn validate(args: &Value) -> Result<Self, ValidationError>;

    /// JSON Schema document for the host's tool catalog
    fn json_schema_value() -> Value {
        schemars::schema_for!(Self).to_value()
    }
}

/// Read-only view over caller arguments
///
/// `null` arguments behave like an empty object so that the caller is told
/// which fields are missing rather than that the payload had the wrong shape.
/// A field whose value is `null` counts as absent.
pub(crate) struct Args<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Args<'a> {
    pub(crate) fn new(raw: &'a Value) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(map) => Ok(Self { fields: Some(map) }),
            Value::Null => Ok(Self { fields: None }),
            _ => Err(ValidationError::NotAnObject),
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|map| map.get(field))
            .filter(|v| !v.is_null())
    }

    /// Fail with every absent field in `fields`, in declaration order
    pub(crate) fn require(&self, fields: &[&'static str]) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = fields
            .iter()
            .copied()
            .filter(|f| self.get(f).is_none())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Required, non-blank string (trimmed)
    pub(crate) fn string(&self, field: &'static str) -> Result<String, ValidationError> {
        let value = self
            .get(field)
            .ok_or_else(|| ValidationError::MissingFields(vec![field]))?;
        non_blank(field, value)
    }

    /// Optional string; blank strings count as absent
    pub(crate) fn optional_string(
        &self,
        field: &'static str,
    ) -> Result<Option<String>, ValidationError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
            Some(_) => Err(ValidationError::InvalidType {
                field,
                expected: "a string",
            }),
        }
    }

    /// Required list of non-blank strings
    pub(crate) fn string_list(&self, field: &'static str) -> Result<Vec<String>, ValidationError> {
        let value = self
            .get(field)
            .ok_or_else(|| ValidationError::MissingFields(vec![field]))?;

        let items = value.as_array().ok_or(ValidationError::InvalidType {
            field,
            expected: "a list of strings",
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                non_blank(field, item).map_err(|_| ValidationError::InvalidValue {
                    field,
                    reason: format!("entry {} must be a non-empty string", i),
                })
            })
            .collect()
    }
}

fn non_blank(field: &'static str, value: &Value) -> Result<String, ValidationError> {
    let s = value.as_str().ok_or(ValidationError::InvalidType {
        field,
        expected: "a string",
    })?;

    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidValue {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
