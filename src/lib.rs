//! Rug Munch Agent Kit
//!
//! Token risk intelligence actions for autonomous trading agents:
//! - Rug pull risk scores for a single token or a batch
//! - Deployer history, holder deep-dives and aggregate token intel
//! - AI forensic verdicts
//! - Webhook monitoring subscriptions
//!
//! # Calling convention
//!
//! Every action returns a JSON string with a boolean `success` flag.
//! Validation errors, payment walls (HTTP 402), remote errors and transport
//! failures are all reported in that envelope; nothing is raised to the host.
//!
//! ```no_run
//! # async fn demo() -> rug_munch_agentkit::Result<()> {
//! use rug_munch_agentkit::rug_munch_action_provider;
//! use serde_json::json;
//!
//! let provider = rug_munch_action_provider()?;
//! let out = provider
//!     .dispatch("check_token_risk", &json!({ "token_address": "So11111111111111111111111111111111111111112" }))
//!     .await;
//! println!("{}", out);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod envelope;
pub mod gateway;
pub mod schema;

mod error;

// Re-export commonly used types
pub use actions::{rug_munch_action_provider, ActionDefinition, RugMunchActionProvider};
pub use config::{ApiConfig, Timeouts, API_BASE_ENV, API_KEY_ENV, DEFAULT_API_BASE};
pub use envelope::NormalizedResult;
pub use error::{Error, Result};
pub use gateway::{GatewayRequest, HttpMethod, HttpRiskGateway, RiskGateway};
pub use schema::ValidationError;
