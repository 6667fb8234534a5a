//! Error types for the Rug Munch action provider

use crate::schema::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("{message}")]
    PaymentRequired {
        message: String,
        pricing: Option<String>,
    },

    #[error("Remote error: HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Transport(format!("request timed out: {}", e))
        } else if e.is_connect() {
            Error::Transport(format!("connection failed: {}", e))
        } else if e.is_decode() {
            Error::Transport(format!("malformed response body: {}", e))
        } else {
            Error::Transport(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
