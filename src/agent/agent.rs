//! Core Agent struct.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::AgentConfig;
use crate::domain::{self, Deps};
use crate::error::AgentError;
use crate::generation::generate_text;
use crate::models::LanguageModel;
use crate::provider::{self, ModelProvider};
use crate::tools::tool::Tool;
use crate::types::*;
use crate::util::retry::RetryPolicy;

/// A model backend configured with a system prompt, tools and a retry
/// budget. `D` is the dependency type handed to every tool call.
///
/// Built once with the `with_*` methods; `run` takes `&self`, so one agent
/// serves any number of runs.
pub struct Agent<D> {
    provider: Arc<dyn ModelProvider>,
    system_prompt: Option<String>,
    tools: Vec<Arc<dyn Tool<D>>>,
    settings: GenerationSettings,
    retries: u32,
}

impl<D> Agent<D>
where
    D: Clone + Send + Sync + 'static,
{
    /// Create an agent over the given provider.
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self {
            provider,
            system_prompt: None,
            tools: Vec::new(),
            settings: GenerationSettings::default(),
            retries: 1,
        }
    }

    /// Set system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Register a tool.
    pub fn with_tool(mut self, tool: impl Tool<D> + 'static) -> Self {
        self.tools.push(Arc::new(tool));
        self
    }

    /// Set generation settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set how many times a failed run (and a run's malformed tool calls)
    /// may be retried.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// `provider:model` identifier of the backend.
    pub fn model_id(&self) -> String {
        format!("{}:{}", self.provider.provider_name(), self.provider.model_id())
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Names of the registered tools, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Run one user turn.
    ///
    /// `history` is the message list from a previous run; when it is empty
    /// the system prompt opens the conversation. The returned messages are
    /// `history` followed by this turn's exchange, including tool calls and
    /// their results. A failed attempt is retried from the same starting
    /// history up to the retry budget.
    pub async fn run(
        &self,
        user_text: impl Into<String>,
        deps: &D,
        history: Option<&[ModelMessage]>,
    ) -> Result<RunResult, AgentError> {
        let user_text = user_text.into();
        let history = history.unwrap_or_default();
        let new_message_index = history.len();

        let mut start = history.to_vec();
        if start.is_empty() {
            if let Some(ref sys) = self.system_prompt {
                start.push(ModelMessage::system(sys.clone()));
            }
        }
        start.push(ModelMessage::user(user_text));

        debug!(
            model = %self.model_id(),
            history = new_message_index,
            tools = self.tools.len(),
            "agent run"
        );

        let start = &start;
        let (attempt, result) = RetryPolicy::from_retries(self.retries)
            .execute(move |attempt| async move {
                let result = generate_text(
                    self.provider.as_ref(),
                    start.clone(),
                    &self.settings,
                    &self.tools,
                    deps,
                    self.retries,
                )
                .await?;
                Ok::<_, AgentError>((attempt, result))
            })
            .await?;

        info!(
            model = %self.model_id(),
            attempts = attempt + 1,
            steps = result.steps.len(),
            total_tokens = result.usage.total_tokens,
            "agent run finished"
        );

        Ok(RunResult {
            output: result.text,
            messages: result.messages,
            new_message_index,
            steps: result.steps,
            usage: result.usage,
            finish_reason: result.finish_reason,
            attempts: attempt + 1,
        })
    }
}

impl Agent<Deps> {
    /// The domain-availability agent: fixed system prompt, the
    /// `get_domain_availability` tool and the default retry budget.
    pub fn domain(provider: Arc<dyn ModelProvider>) -> Self {
        Self::new(provider)
            .with_system_prompt(domain::SYSTEM_PROMPT)
            .with_tool(domain::domain_availability_tool())
            .with_retries(domain::DEFAULT_RETRIES)
    }

    /// Build the domain agent for `model`, reusing `client` for model calls.
    pub fn domain_for_model(
        model: &LanguageModel,
        config: &AgentConfig,
        client: &reqwest::Client,
    ) -> Result<Self, AgentError> {
        let provider = provider::create_provider(model, config, client)?;
        Ok(Self::domain(Arc::from(provider)))
    }
}

impl<D> std::fmt::Debug for Agent<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.provider.model_id())
            .field("system_prompt", &self.system_prompt)
            .field("tools", &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>())
            .field("retries", &self.retries)
            .finish()
    }
}
