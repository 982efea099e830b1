//! Tool trait and closure-based tool wrapper.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::arguments::ToolArguments;
use super::types::AgentToolParameters;
use crate::error::AgentError;

/// Context handed to a tool on every invocation.
///
/// `deps` is the caller's dependency bundle; tools get all external
/// resources through it.
#[derive(Debug, Clone)]
pub struct RunContext<D> {
    pub deps: D,
    /// Number of argument corrections already spent in this run attempt.
    pub retry: u32,
    /// Id of the tool call being answered.
    pub tool_call_id: String,
}

/// Core tool trait, generic over the agent's dependency type.
#[async_trait]
pub trait Tool<D>: Send + Sync {
    /// Tool name (must match what the model calls).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema parameters.
    fn parameters(&self) -> &AgentToolParameters;

    /// Execute the tool with parsed arguments.
    ///
    /// Return `AgentError::InvalidArgument` to ask the model to fix its
    /// call; any other error fails the run attempt.
    async fn execute(
        &self,
        args: &ToolArguments,
        ctx: &RunContext<D>,
    ) -> Result<serde_json::Value, AgentError>;
}

type ToolFuture = Pin<Box<dyn Future<Output = Result<serde_json::Value, AgentError>> + Send>>;

/// Type alias for the tool handler function.
type ToolHandler<D> = dyn Fn(ToolArguments, RunContext<D>) -> ToolFuture + Send + Sync;

/// Closure-based tool for quick tool creation.
pub struct AgentTool<D> {
    name: String,
    description: String,
    parameters: AgentToolParameters,
    handler: Arc<ToolHandler<D>>,
}

impl<D> AgentTool<D>
where
    D: Clone + Send + Sync + 'static,
{
    /// Create a tool from a closure over raw JSON arguments.
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: AgentToolParameters,
        handler: F,
    ) -> Self
    where
        F: Fn(ToolArguments, RunContext<D>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, AgentError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Arc::new(move |args, ctx| Box::pin(handler(args, ctx))),
        }
    }

    /// Create a tool whose arguments and output are typed.
    ///
    /// Arguments that fail to deserialize into `A` surface as
    /// `AgentError::InvalidArgument`; the output is serialized to JSON.
    pub fn typed<A, R, F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: AgentToolParameters,
        handler: F,
    ) -> Self
    where
        A: DeserializeOwned + Send + 'static,
        R: Serialize + 'static,
        F: Fn(A, RunContext<D>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, AgentError>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        Self::new(name, description, parameters, move |args, ctx| {
            let handler = Arc::clone(&handler);
            async move {
                let parsed: A = args.deserialize()?;
                let output = (handler.as_ref())(parsed, ctx).await?;
                Ok::<_, AgentError>(serde_json::to_value(output)?)
            }
        })
    }
}

#[async_trait]
impl<D> Tool<D> for AgentTool<D>
where
    D: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &AgentToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        ctx: &RunContext<D>,
    ) -> Result<serde_json::Value, AgentError> {
        (self.handler)(args.clone(), ctx.clone()).await
    }
}

impl<D> std::fmt::Debug for AgentTool<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}
