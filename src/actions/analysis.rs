//! AI forensic verdict

use super::{ActionDefinition, ACTION_MARCUS_QUICK_ANALYSIS};
use crate::config::Timeouts;
use crate::gateway::GatewayRequest;
use crate::schema::MarcusQuickSchema;
use crate::Result;

const MARCUS_QUICK_ANALYSIS_DESCRIPTION: &str = "\
AI forensic verdict by Marcus Aurelius.
One-paragraph analysis with risk score, key flags, and recommendation.
Use for quick expert opinion on borderline tokens. ~5-30s. Cost: $0.15.

Inputs:
- token_address: Token to analyze
- chain: Blockchain (defaults to solana)
- question: Optional specific question about the token";

pub(super) fn definitions() -> Vec<ActionDefinition> {
    vec![ActionDefinition::new(
        ACTION_MARCUS_QUICK_ANALYSIS,
        MARCUS_QUICK_ANALYSIS_DESCRIPTION,
        marcus_quick,
    )]
}

/// Model-backed analysis is slow, so this call gets the extended timeout
fn marcus_quick(input: MarcusQuickSchema, timeouts: &Timeouts) -> Result<GatewayRequest> {
    GatewayRequest::post("marcus-quick", &input, timeouts.extended)
}
