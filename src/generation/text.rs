//! Text generation with tool loop.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::provider::{ModelProvider, ProviderRequest, ToolDefinition};
use crate::tools::tool::{RunContext, Tool};
use crate::tools::validation::validate_arguments;
use crate::tools::ToolArguments;
use crate::types::*;

/// Maximum tool loop iterations to prevent infinite loops.
pub const MAX_TOOL_ITERATIONS: usize = 20;

/// Outcome of executing one tool call.
enum CallOutcome {
    Done(serde_json::Value),
    /// The call was malformed; the message goes back to the model.
    Correct(String),
}

/// Generate text with a tool loop.
///
/// Tool calls returned by the model are executed and fed back until the
/// model produces a response without calls. Malformed calls (unknown tool,
/// arguments failing the schema or deserialization) are answered with an
/// error result so the model can fix them; more than `max_corrections` of
/// those fail the loop. Any other tool error is returned immediately.
pub async fn generate_text<D>(
    provider: &dyn ModelProvider,
    mut messages: Vec<ModelMessage>,
    settings: &GenerationSettings,
    tools: &[Arc<dyn Tool<D>>],
    deps: &D,
    max_corrections: u32,
) -> Result<GenerateTextResult, AgentError>
where
    D: Clone + Send + Sync,
{
    let tool_defs: Option<Vec<ToolDefinition>> = if tools.is_empty() {
        None
    } else {
        Some(
            tools
                .iter()
                .map(|t| ToolDefinition {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters().schema.clone(),
                })
                .collect(),
        )
    };

    let mut steps = Vec::new();
    let mut total_usage = Usage::default();
    let mut corrections = 0u32;

    for iteration in 0..MAX_TOOL_ITERATIONS {
        let request = ProviderRequest {
            messages: messages.clone(),
            settings: settings.clone(),
            tools: tool_defs.clone(),
        };

        debug!(iteration, "generate_text: calling provider");
        let response = provider.generate_text(&request).await?;

        total_usage.merge(&response.usage);

        let mut step = GenerationStep {
            text: response.text.clone(),
            tool_calls: response.tool_calls.clone(),
            tool_results: Vec::new(),
            usage: response.usage,
            finish_reason: response.finish_reason,
        };

        if response.tool_calls.is_empty() {
            messages.push(ModelMessage::assistant(response.text.clone()));
            steps.push(step);
            return Ok(GenerateTextResult {
                text: response.text,
                steps,
                messages,
                usage: total_usage,
                finish_reason: response.finish_reason,
            });
        }

        messages.push(ModelMessage::assistant_tool_calls(
            response.text.clone(),
            &response.tool_calls,
        ));

        for tc in &response.tool_calls {
            let outcome = execute_call(tools, tc, deps, corrections).await?;
            let result = match outcome {
                CallOutcome::Done(value) => AgentToolResult {
                    tool_call_id: tc.id.clone(),
                    result: value,
                    is_error: false,
                },
                CallOutcome::Correct(message) => {
                    corrections += 1;
                    if corrections > max_corrections {
                        return Err(AgentError::UnexpectedModelBehavior(format!(
                            "Tool '{}' exceeded max retries count of {max_corrections}: {message}",
                            tc.name
                        )));
                    }
                    warn!(tool = %tc.name, error = %message, "Asking model to fix tool call");
                    AgentToolResult {
                        tool_call_id: tc.id.clone(),
                        result: json!({
                            "error": message,
                            "hint": "Fix the errors and try again.",
                        }),
                        is_error: true,
                    }
                }
            };
            step.tool_results.push(result.clone());
            messages.push(ModelMessage::tool_result(
                result.tool_call_id,
                result.result,
                result.is_error,
            ));
        }

        steps.push(step);
    }

    Err(AgentError::UnexpectedModelBehavior(format!(
        "Model kept calling tools after {MAX_TOOL_ITERATIONS} iterations"
    )))
}

async fn execute_call<D>(
    tools: &[Arc<dyn Tool<D>>],
    tc: &AgentToolCall,
    deps: &D,
    corrections: u32,
) -> Result<CallOutcome, AgentError>
where
    D: Clone + Send + Sync,
{
    let Some(tool) = tools.iter().find(|t| t.name() == tc.name) else {
        let available = tools.iter().map(|t| t.name()).collect::<Vec<_>>().join(", ");
        return Ok(CallOutcome::Correct(format!(
            "Unknown tool name: '{}'. Available tools: {available}",
            tc.name
        )));
    };

    let arguments = ToolArguments::new(tc.arguments.clone());
    if let Err(message) = validate_arguments(arguments.raw(), &tool.parameters().schema) {
        return Ok(CallOutcome::Correct(message));
    }

    let ctx = RunContext {
        deps: deps.clone(),
        retry: corrections,
        tool_call_id: tc.id.clone(),
    };
    match tool.execute(&arguments, &ctx).await {
        Ok(value) => Ok(CallOutcome::Done(value)),
        Err(AgentError::InvalidArgument(message)) => Ok(CallOutcome::Correct(message)),
        Err(e) => {
            warn!(tool = %tc.name, error = %e, "Tool execution failed");
            Err(AgentError::tool(tc.name.clone(), e))
        }
    }
}
