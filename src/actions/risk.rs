//! Risk score checks for one token or a batch

use super::{ActionDefinition, ACTION_CHECK_BATCH_RISK, ACTION_CHECK_TOKEN_RISK};
use crate::config::Timeouts;
use crate::gateway::GatewayRequest;
use crate::schema::{CheckBatchSchema, CheckRiskSchema};
use crate::Result;

/// Upper bound the remote batch endpoint accepts
pub const MAX_BATCH_TOKENS: usize = 20;

const CHECK_TOKEN_RISK_DESCRIPTION: &str = "\
CRITICAL: Check a token's rug pull risk BEFORE buying or trading.

Returns a 0-100 risk score, honeypot detection, freeze authority check,
holder concentration, deployer history, and a SAFE/CAUTION/AVOID recommendation.

ALWAYS call this before executing any token swap or purchase.
Cost: $0.04 per check.

Inputs:
- token_address: Token mint (Solana) or contract address (EVM)
- chain: Blockchain (solana, ethereum, base, etc.), defaults to solana

Example output:
{
  \"risk_score\": 85,
  \"risk_level\": \"critical\",
  \"recommendation\": \"AVOID\",
  \"honeypot_risk\": true,
  \"risk_factors\": [\"Freeze authority enabled\", \"Top 10 hold 94%\", \"Serial rugger deployer\"]
}";

const CHECK_BATCH_RISK_DESCRIPTION: &str = "\
Batch risk check for up to 20 tokens at once.
Use for portfolio screening or evaluating multiple tokens.
Cost: $0.30 (~$0.015 per token).

Inputs:
- tokens: List of token addresses (max 20)
- chain: Blockchain (defaults to solana)";

pub(super) fn definitions() -> Vec<ActionDefinition> {
    vec![
        ActionDefinition::new(
            ACTION_CHECK_TOKEN_RISK,
            CHECK_TOKEN_RISK_DESCRIPTION,
            check_token_risk,
        ),
        ActionDefinition::new(
            ACTION_CHECK_BATCH_RISK,
            CHECK_BATCH_RISK_DESCRIPTION,
            check_batch_risk,
        ),
    ]
}

fn check_token_risk(input: CheckRiskSchema, timeouts: &Timeouts) -> Result<GatewayRequest> {
    GatewayRequest::post("check-risk", &input, timeouts.standard)
}

fn check_batch_risk(input: CheckBatchSchema, timeouts: &Timeouts) -> Result<GatewayRequest> {
    let CheckBatchSchema { mut tokens, chain } = input;

    // Oversized batches are truncated, not rejected: callers have always
    // been able to pass a full watchlist and get the first 20 scored.
    if tokens.len() > MAX_BATCH_TOKENS {
        tracing::warn!(
            requested = tokens.len(),
            limit = MAX_BATCH_TOKENS,
            "Truncating batch risk check"
        );
        tokens.truncate(MAX_BATCH_TOKENS);
    }

    GatewayRequest::post(
        "check-batch",
        &CheckBatchSchema { tokens, chain },
        timeouts.standard,
    )
}
