//! Actions exposed to the host agent framework
//!
//! Each action is a plain [`ActionDefinition`]: a name, a model-facing
//! description, the JSON Schema of its input and a handler that validates
//! raw arguments and turns them into exactly one [`GatewayRequest`].
//! The full table is built once by [`RugMunchActionProvider`].

mod analysis;
mod lookup;
mod registry;
mod risk;
mod watch;

pub use registry::{rug_munch_action_provider, RugMunchActionProvider};
pub use risk::MAX_BATCH_TOKENS;

use crate::config::Timeouts;
use crate::gateway::GatewayRequest;
use crate::schema::InputSchema;
use crate::Result;
use serde_json::{json, Value};
use std::fmt;

pub const ACTION_CHECK_TOKEN_RISK: &str = "check_token_risk";
pub const ACTION_CHECK_BATCH_RISK: &str = "check_batch_risk";
pub const ACTION_CHECK_DEPLOYER_HISTORY: &str = "check_deployer_history";
pub const ACTION_GET_HOLDER_DEEPDIVE: &str = "get_holder_deepdive";
pub const ACTION_GET_TOKEN_INTELLIGENCE: &str = "get_token_intelligence";
pub const ACTION_MARCUS_QUICK_ANALYSIS: &str = "marcus_quick_analysis";
pub const ACTION_WATCH_TOKEN_RISK: &str = "watch_token_risk";

type Handler = Box<dyn Fn(&Value, &Timeouts) -> Result<GatewayRequest> + Send + Sync>;

/// A named, schema-validated action
pub struct ActionDefinition {
    name: &'static str,
    description: &'static str,
    input_schema: Value,
    handler: Handler,
}

impl ActionDefinition {
    /// Define an action whose input is validated as `S` before `build` runs
    pub(crate) fn new<S>(
        name: &'static str,
        description: &'static str,
        build: fn(S, &Timeouts) -> Result<GatewayRequest>,
    ) -> Self
    where
        S: InputSchema + 'static,
    {
        Self {
            name,
            description,
            input_schema: S::json_schema_value(),
            handler: Box::new(move |args, timeouts| {
                let input = S::validate(args)?;
                build(input, timeouts)
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn input_schema(&self) -> &Value {
        &self.input_schema
    }

    /// Validate `args` and build the outbound request
    ///
    /// Pure: no I/O happens here, so a validation failure can never reach
    /// the network.
    pub fn build_request(&self, args: &Value, timeouts: &Timeouts) -> Result<GatewayRequest> {
        (self.handler)(args, timeouts)
    }

    /// Catalog entry for the host's tool list
    pub fn to_catalog_entry(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.input_schema,
        })
    }
}

impl fmt::Debug for ActionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Every action, in catalog order
pub(crate) fn all_actions() -> Vec<ActionDefinition> {
    let mut actions = Vec::new();
    actions.extend(risk::definitions());
    actions.extend(lookup::definitions());
    actions.extend(analysis::definitions());
    actions.extend(watch::definitions());
    actions
}
