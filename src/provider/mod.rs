//! Model provider trait and implementations.

pub(crate) mod format;
pub mod http;

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "ollama")]
pub mod ollama;

use async_trait::async_trait;

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::models::LanguageModel;
use crate::types::{message::AgentToolCall, FinishReason, GenerationSettings, ModelMessage, Usage};

/// A request sent to a model provider.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub messages: Vec<ModelMessage>,
    pub settings: GenerationSettings,
    pub tools: Option<Vec<ToolDefinition>>,
}

/// Tool definition sent to the provider API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Response from a provider.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub usage: Usage,
    pub tool_calls: Vec<AgentToolCall>,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by all model providers.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g., "openai", "ollama").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Generate a single model response (text and/or tool calls).
    async fn generate_text(&self, request: &ProviderRequest)
        -> Result<ProviderResponse, AgentError>;
}

/// Create a provider for the given model.
///
/// `client` is the process-wide HTTP client; the provider keeps a clone.
#[allow(unused_variables)]
pub fn create_provider(
    model: &LanguageModel,
    config: &AgentConfig,
    client: &reqwest::Client,
) -> Result<Box<dyn ModelProvider>, AgentError> {
    match model {
        #[cfg(feature = "openai")]
        LanguageModel::OpenAi(m) => {
            let api_key = config
                .get_api_key("openai")
                .ok_or_else(|| AgentError::Authentication("Missing OPENAI_API_KEY".into()))?;
            Ok(Box::new(openai::OpenAiProvider::new(
                client.clone(),
                m.clone(),
                Some(api_key),
                config.get_base_url("openai"),
            )))
        }
        #[cfg(feature = "ollama")]
        LanguageModel::Ollama(m) => {
            let base_url = config
                .get_base_url("ollama")
                .unwrap_or_else(|| ollama::DEFAULT_BASE_URL.to_string());
            Ok(Box::new(ollama::OllamaProvider::new(
                client.clone(),
                m.clone(),
                base_url,
                config.get_api_key("ollama"),
            )))
        }
        LanguageModel::Custom { provider, .. } => Err(AgentError::ModelNotFound(format!(
            "No built-in provider for '{provider}'"
        ))),
    }
}
