//! The Rug Munch action provider
//!
//! Holds the fixed action table and the gateway. After construction nothing
//! is mutated, so one provider can serve any number of concurrent dispatches.

use super::{all_actions, ActionDefinition};
use crate::config::{ApiConfig, Timeouts};
use crate::envelope::NormalizedResult;
use crate::gateway::{GatewayRequest, HttpRiskGateway, RiskGateway};
use crate::{Error, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Token risk intelligence for agent frameworks
///
/// Adds rug pull detection, honeypot checks, deployer history, holder
/// analysis and AI forensic verdicts to any trading agent.
pub struct RugMunchActionProvider {
    actions: Vec<ActionDefinition>,
    gateway: Arc<dyn RiskGateway>,
    timeouts: Timeouts,
}

impl RugMunchActionProvider {
    /// Provider name as registered with the host
    pub const NAME: &'static str = "rug_munch";

    /// Create a provider talking to the configured risk API
    pub fn new(config: ApiConfig) -> Result<Self> {
        let timeouts = config.timeouts;
        let gateway = HttpRiskGateway::new(config)?;
        Ok(Self::with_gateway(Arc::new(gateway), timeouts))
    }

    /// Create a provider over any gateway implementation
    pub fn with_gateway(gateway: Arc<dyn RiskGateway>, timeouts: Timeouts) -> Self {
        let actions = all_actions();
        tracing::debug!(
            provider = Self::NAME,
            gateway = gateway.name(),
            actions = actions.len(),
            "Registered actions"
        );
        Self {
            actions,
            gateway,
            timeouts,
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// All actions in catalog order
    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }

    pub fn action(&self, name: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|a| a.name() == name)
    }

    /// Host-facing tool catalog: `[{name, description, input_schema}]`
    pub fn catalog(&self) -> Value {
        Value::Array(
            self.actions
                .iter()
                .map(ActionDefinition::to_catalog_entry)
                .collect(),
        )
    }

    /// Look up `name`, validate `args` and build its request without sending
    pub fn build_request(&self, name: &str, args: &Value) -> Result<GatewayRequest> {
        let action = self
            .action(name)
            .ok_or_else(|| Error::UnknownAction(name.to_string()))?;
        action.build_request(args, &self.timeouts)
    }

    /// Run an action and return its normalized result
    ///
    /// Never fails: unknown names, bad arguments, payment walls and
    /// transport errors all come back as `success: false`.
    pub async fn invoke(&self, name: &str, args: &Value) -> NormalizedResult {
        let request = match self.build_request(name, args) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(action = name, error = %e, "Rejected action call");
                return NormalizedResult::from_error(&e);
            }
        };

        let start = Instant::now();
        let result = self.gateway.request(&request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        if result.is_success() {
            tracing::info!(action = name, duration_ms, "Action completed");
        } else {
            tracing::warn!(
                action = name,
                duration_ms,
                error = result.error().unwrap_or_default(),
                "Action failed"
            );
        }

        result
    }

    /// Host entry point: always returns a JSON string
    pub async fn dispatch(&self, name: &str, args: &Value) -> String {
        self.invoke(name, args).await.to_json_string()
    }

    /// Every network is accepted; the remote service decides coverage
    pub fn supports_network(&self, _network: &str) -> bool {
        true
    }
}

impl std::fmt::Debug for RugMunchActionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RugMunchActionProvider")
            .field("gateway", &self.gateway.name())
            .field("actions", &self.actions.len())
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

/// Create the provider from `RUG_MUNCH_API_BASE` / `RUG_MUNCH_API_KEY`
pub fn rug_munch_action_provider() -> Result<RugMunchActionProvider> {
    RugMunchActionProvider::new(ApiConfig::from_env()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        ACTION_CHECK_BATCH_RISK, ACTION_CHECK_TOKEN_RISK, ACTION_MARCUS_QUICK_ANALYSIS,
        MAX_BATCH_TOKENS,
    };
    use crate::gateway::PAYMENT_REQUIRED_MESSAGE;
    use async_trait::async_trait;
    use serde_json::{json, Map};
    use tokio::sync::Mutex;

    /// Records requests and replies with a canned outcome
    struct RecordingGateway {
        requests: Mutex<Vec<GatewayRequest>>,
        reply: fn() -> Result<Map<String, Value>>,
    }

    impl RecordingGateway {
        fn new(reply: fn() -> Result<Map<String, Value>>) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                reply,
            })
        }

        async fn sent(&self) -> Vec<GatewayRequest> {
            self.requests.lock().await.clone()
        }
    }

    #[async_trait]
    impl RiskGateway for RecordingGateway {
        async fn send(&self, request: &GatewayRequest) -> Result<Map<String, Value>> {
            self.requests.lock().await.push(request.clone());
            (self.reply)()
        }

        fn name(&self) -> &'static str {
            "RecordingGateway"
        }
    }

    fn avoid() -> Result<Map<String, Value>> {
        Ok(json!({"risk_score": 85, "recommendation": "AVOID"})
            .as_object()
            .cloned()
            .unwrap())
    }

    fn paywall() -> Result<Map<String, Value>> {
        Err(Error::PaymentRequired {
            message: PAYMENT_REQUIRED_MESSAGE.to_string(),
            pricing: Some("See https://cryptorugmunch.app/api/agent/v1/status".to_string()),
        })
    }

    fn timeout() -> Result<Map<String, Value>> {
        Err(Error::Transport("request timed out after 30s".to_string()))
    }

    fn provider(gateway: Arc<RecordingGateway>) -> RugMunchActionProvider {
        RugMunchActionProvider::with_gateway(gateway, Timeouts::default())
    }

    #[tokio::test]
    async fn test_success_merges_remote_body() {
        let gateway = RecordingGateway::new(avoid);
        let provider = provider(gateway.clone());

        let out = provider
            .dispatch(ACTION_CHECK_TOKEN_RISK, &json!({"token_address": "Mint1"}))
            .await;
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            json!({"success": true, "risk_score": 85, "recommendation": "AVOID"})
        );

        let sent = gateway.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].body_field("chain"), Some(&json!("solana")));
    }

    #[tokio::test]
    async fn test_missing_fields_never_reach_gateway() {
        let gateway = RecordingGateway::new(avoid);
        let provider = provider(gateway.clone());

        for action in provider.actions() {
            let result = provider.invoke(action.name(), &json!({})).await;
            assert!(!result.is_success(), "{}", action.name());
            assert!(result
                .error()
                .unwrap()
                .contains("missing required field(s)"));
        }
        assert!(gateway.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_action_is_normalized() {
        let gateway = RecordingGateway::new(avoid);
        let provider = provider(gateway.clone());

        let out = provider.dispatch("rug_everything", &json!({})).await;
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["error"], "Unknown action: rug_everything");
        assert!(gateway.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_of_25_sends_20() {
        let gateway = RecordingGateway::new(avoid);
        let provider = provider(gateway.clone());

        let tokens: Vec<String> = (0..25).map(|i| format!("Mint{}", i)).collect();
        let result = provider
            .invoke(ACTION_CHECK_BATCH_RISK, &json!({"tokens": tokens}))
            .await;
        assert!(result.is_success());

        let sent = gateway.sent().await;
        assert_eq!(sent.len(), 1);
        let forwarded = sent[0].body_field("tokens").unwrap().as_array().unwrap();
        assert_eq!(forwarded.len(), MAX_BATCH_TOKENS);
    }

    #[tokio::test]
    async fn test_payment_required_is_a_result() {
        let provider = provider(RecordingGateway::new(paywall));
        let result = provider
            .invoke(ACTION_CHECK_TOKEN_RISK, &json!({"token_address": "Mint1"}))
            .await;

        assert!(!result.is_success());
        assert_eq!(result.error(), Some(PAYMENT_REQUIRED_MESSAGE));
        assert!(result.get("pricing").is_some());
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_result() {
        let provider = provider(RecordingGateway::new(timeout));
        let out = provider
            .dispatch(ACTION_MARCUS_QUICK_ANALYSIS, &json!({"token_address": "Mint1"}))
            .await;
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["success"], false);
        assert!(parsed["error"].as_str().unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn test_marcus_gets_extended_timeout() {
        let gateway = RecordingGateway::new(avoid);
        let provider = provider(gateway.clone());
        provider
            .invoke(ACTION_MARCUS_QUICK_ANALYSIS, &json!({"token_address": "Mint1"}))
            .await;

        let sent = gateway.sent().await;
        assert_eq!(sent[0].timeout, Timeouts::default().extended);
    }

    #[test]
    fn test_supports_every_network() {
        let provider = provider(RecordingGateway::new(avoid));
        for network in ["solana", "base", "ethereum-mainnet", "some-future-l2", ""] {
            assert!(provider.supports_network(network));
        }
    }

    #[test]
    fn test_catalog_lists_all_actions() {
        let provider = provider(RecordingGateway::new(avoid));
        let catalog = provider.catalog();
        let entries = catalog.as_array().unwrap();
        assert_eq!(entries.len(), 7);
        assert!(entries
            .iter()
            .all(|e| e["input_schema"]["type"] == "object"));
        assert_eq!(provider.name(), "rug_munch");
    }

    #[test]
    fn test_build_request_unknown_action() {
        let provider = provider(RecordingGateway::new(avoid));
        assert!(matches!(
            provider.build_request("nope", &json!({})),
            Err(Error::UnknownAction(name)) if name == "nope"
        ));
    }
}
