//! Ollama local provider (OpenAI-compatible).

use async_trait::async_trait;

use crate::error::AgentError;

use super::openai::OpenAiProvider;
use super::{ModelProvider, ProviderRequest, ProviderResponse};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

pub struct OllamaProvider {
    inner: OpenAiProvider,
}

impl OllamaProvider {
    pub fn new(
        client: reqwest::Client,
        model_id: String,
        base_url: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            inner: OpenAiProvider::new(
                client,
                model_id,
                api_key,
                Some(format!("{}/v1", base_url.trim_end_matches('/'))),
            )
            .named("ollama"),
        }
    }
}

#[async_trait]
impl ModelProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    fn model_id(&self) -> &str {
        self.inner.model_id()
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, AgentError> {
        self.inner.generate_text(request).await
    }
}
