//! Typed inputs for each action

use super::{Args, InputSchema, ValidationError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Network assumed when the caller does not name one
pub const DEFAULT_CHAIN: &str = "solana";

fn default_chain() -> String {
    DEFAULT_CHAIN.to_string()
}

/// Input for `check_token_risk`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckRiskSchema {
    /// Token mint (Solana) or contract address (EVM)
    pub token_address: String,
    /// Blockchain: solana, ethereum, base, arbitrum, polygon
    #[serde(default = "default_chain")]
    pub chain: String,
}

impl InputSchema for CheckRiskSchema {
    fn validate(args: &Value) -> Result<Self, ValidationError> {
        let args = Args::new(args)?;
        args.require(&["token_address"])?;
        Ok(Self {
            token_address: args.string("token_address")?,
            chain: args.optional_string("chain")?.unwrap_or_else(default_chain),
        })
    }
}

/// Input for `check_batch_risk`
///
/// Any number of addresses is accepted here; the request builder forwards
/// at most the first twenty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckBatchSchema {
    /// List of token addresses (max 20)
    pub tokens: Vec<String>,
    /// Blockchain for every token in the batch
    #[serde(default = "default_chain")]
    pub chain: String,
}

impl InputSchema for CheckBatchSchema {
    fn validate(args: &Value) -> Result<Self, ValidationError> {
        let args = Args::new(args)?;
        args.require(&["tokens"])?;
        Ok(Self {
            tokens: args.string_list("tokens")?,
            chain: args.optional_string("chain")?.unwrap_or_else(default_chain),
        })
    }
}

/// Input for `check_deployer_history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeployerCheckSchema {
    /// Deployer wallet address
    pub deployer_address: String,
}

impl InputSchema for DeployerCheckSchema {
    fn validate(args: &Value) -> Result<Self, ValidationError> {
        let args = Args::new(args)?;
        args.require(&["deployer_address"])?;
        Ok(Self {
            deployer_address: args.string("deployer_address")?,
        })
    }
}

/// Input shared by the single-token lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TokenAddressSchema {
    /// Token address
    pub token_address: String,
}

impl InputSchema for TokenAddressSchema {
    fn validate(args: &Value) -> Result<Self, ValidationError> {
        let args = Args::new(args)?;
        args.require(&["token_address"])?;
        Ok(Self {
            token_address: args.string("token_address")?,
        })
    }
}

/// Input for `marcus_quick_analysis`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MarcusQuickSchema {
    /// Token address
    pub token_address: String,
    /// Blockchain the token lives on
    #[serde(default = "default_chain")]
    pub chain: String,
    /// Optional specific question about the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl InputSchema for MarcusQuickSchema {
    fn validate(args: &Value) -> Result<Self, ValidationError> {
        let args = Args::new(args)?;
        args.require(&["token_address"])?;
        Ok(Self {
            token_address: args.string("token_address")?,
            chain: args.optional_string("chain")?.unwrap_or_else(default_chain),
            question: args.optional_string("question")?,
        })
    }
}

/// Alert categories for token monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WatchType {
    /// Risk score moved
    RiskChange,
    /// Rug pull detected
    #[default]
    RugDetected,
    /// Sharp price drop
    PriceDrop,
    /// Every alert category
    All,
}

impl WatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchType::RiskChange => "risk_change",
            WatchType::RugDetected => "rug_detected",
            WatchType::PriceDrop => "price_drop",
            WatchType::All => "all",
        }
    }
}

impl fmt::Display for WatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "risk_change" => Ok(WatchType::RiskChange),
            "rug_detected" => Ok(WatchType::RugDetected),
            "price_drop" => Ok(WatchType::PriceDrop),
            "all" => Ok(WatchType::All),
            other => Err(format!(
                "unknown watch type '{}'. Supported: risk_change, rug_detected, price_drop, all",
                other
            )),
        }
    }
}

/// Input for `watch_token_risk`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WatchTokenSchema {
    /// Token to monitor
    pub token_address: String,
    /// HTTPS URL to POST alerts to
    pub webhook_url: String,
    /// Which alerts to deliver
    #[serde(default)]
    pub watch_type: WatchType,
}

impl InputSchema for WatchTokenSchema {
    fn validate(args: &Value) -> Result<Self, ValidationError> {
        let args = Args::new(args)?;
        args.require(&["token_address", "webhook_url"])?;

        let webhook_url = args.string("webhook_url")?;
        check_webhook_url(&webhook_url)?;

        let watch_type = match args.optional_string("watch_type")? {
            Some(raw) => raw
                .parse()
                .map_err(|reason| ValidationError::InvalidValue {
                    field: "watch_type",
                    reason,
                })?,
            None => WatchType::default(),
        };

        Ok(Self {
            token_address: args.string("token_address")?,
            webhook_url,
            watch_type,
        })
    }
}

fn check_webhook_url(raw: &str) -> Result<(), ValidationError> {
    let url = Url::parse(raw).map_err(|e| ValidationError::InvalidValue {
        field: "webhook_url",
        reason: e.to_string(),
    })?;

    if url.scheme() != "https" {
        return Err(ValidationError::InvalidValue {
            field: "webhook_url",
            reason: format!("scheme must be https, got '{}'", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ValidationError::InvalidValue {
            field: "webhook_url",
            reason: "missing host".to_string(),
        });
    }
    Ok(())
}
