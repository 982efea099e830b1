//! The `get_domain_availability` tool.

use serde::Deserialize;

use crate::tools::{AgentTool, AgentToolParameters, RunContext};

use super::client::check_availability;
use super::deps::Deps;

/// Name the model uses to call the tool.
pub const TOOL_NAME: &str = "get_domain_availability";

const TOOL_DESCRIPTION: &str =
    "Check whether one or more domain names are available for registration.";

/// Arguments the model sends with a call.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainQuery {
    pub domain_names: Vec<String>,
}

/// Build the tool for registration on an agent.
pub fn domain_availability_tool() -> AgentTool<Deps> {
    AgentTool::typed(
        TOOL_NAME,
        TOOL_DESCRIPTION,
        AgentToolParameters::object()
            .string_array(
                "domain_names",
                "Fully qualified domain names to check, e.g. example.com",
                1,
                true,
            )
            .build(),
        |query: DomainQuery, ctx: RunContext<Deps>| async move {
            check_availability(&ctx.deps, &query.domain_names).await
        },
    )
}
