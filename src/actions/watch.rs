//! Webhook monitoring subscriptions

use super::{ActionDefinition, ACTION_WATCH_TOKEN_RISK};
use crate::config::Timeouts;
use crate::gateway::GatewayRequest;
use crate::schema::WatchTokenSchema;
use crate::Result;

const WATCH_TOKEN_RISK_DESCRIPTION: &str = "\
Set up real-time token monitoring with webhook alerts.
When risk changes, rug detected, or price drops, we POST to your webhook.
Covers 7 days of monitoring. Cost: $0.20.

Inputs:
- token_address: Token to monitor
- webhook_url: HTTPS URL to receive alerts
- watch_type: risk_change, rug_detected, price_drop, or all";

pub(super) fn definitions() -> Vec<ActionDefinition> {
    vec![ActionDefinition::new(
        ACTION_WATCH_TOKEN_RISK,
        WATCH_TOKEN_RISK_DESCRIPTION,
        watch_token,
    )]
}

fn watch_token(input: WatchTokenSchema, timeouts: &Timeouts) -> Result<GatewayRequest> {
    GatewayRequest::post("watch", &input, timeouts.standard)
}
