//! Read-only lookups keyed by a single address

use super::{
    ActionDefinition, ACTION_CHECK_DEPLOYER_HISTORY, ACTION_GET_HOLDER_DEEPDIVE,
    ACTION_GET_TOKEN_INTELLIGENCE,
};
use crate::config::Timeouts;
use crate::gateway::GatewayRequest;
use crate::schema::{DeployerCheckSchema, TokenAddressSchema};
use crate::Result;

const CHECK_DEPLOYER_HISTORY_DESCRIPTION: &str = "\
Check a token deployer's full history.
Returns tokens deployed, rug count, and classification:
legitimate_builder, suspicious, or serial_rugger.
Essential for evaluating new token trustworthiness. Cost: $0.06.

Inputs:
- deployer_address: The deployer's wallet address";

const GET_HOLDER_DEEPDIVE_DESCRIPTION: &str = "\
Deep holder analysis for a token.
Detects: snipers, Jito bundles, fresh wallet clusters, whale concentration,
connected wallet patterns, and coordinated manipulation. Cost: $0.10.

Inputs:
- token_address: Token to analyze";

const GET_TOKEN_INTELLIGENCE_DESCRIPTION: &str = "\
Comprehensive token data: price, volume, market cap, holder stats,
LP lock status, authority flags, buy/sell ratios, and top holders. Cost: $0.06.

Inputs:
- token_address: Token to look up";

pub(super) fn definitions() -> Vec<ActionDefinition> {
    vec![
        ActionDefinition::new(
            ACTION_CHECK_DEPLOYER_HISTORY,
            CHECK_DEPLOYER_HISTORY_DESCRIPTION,
            deployer_history,
        ),
        ActionDefinition::new(
            ACTION_GET_HOLDER_DEEPDIVE,
            GET_HOLDER_DEEPDIVE_DESCRIPTION,
            holder_deepdive,
        ),
        ActionDefinition::new(
            ACTION_GET_TOKEN_INTELLIGENCE,
            GET_TOKEN_INTELLIGENCE_DESCRIPTION,
            token_intelligence,
        ),
    ]
}

fn deployer_history(input: DeployerCheckSchema, timeouts: &Timeouts) -> Result<GatewayRequest> {
    Ok(GatewayRequest::get(
        ["deployer".to_string(), input.deployer_address],
        timeouts.standard,
    ))
}

fn holder_deepdive(input: TokenAddressSchema, timeouts: &Timeouts) -> Result<GatewayRequest> {
    Ok(GatewayRequest::get(
        ["holder-deepdive".to_string(), input.token_address],
        timeouts.standard,
    ))
}

fn token_intelligence(input: TokenAddressSchema, timeouts: &Timeouts) -> Result<GatewayRequest> {
    Ok(GatewayRequest::get(
        ["token-intel".to_string(), input.token_address],
        timeouts.standard,
    ))
}
