//! Language model identifiers.

pub mod selector;

pub use selector::ModelSelector;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default model for the domain agent.
pub const DEFAULT_MODEL: &str = "ollama:llama3.2";

/// A `provider:model` pair naming the backend an agent talks to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "provider", content = "model")]
pub enum LanguageModel {
    #[cfg(feature = "openai")]
    OpenAi(String),
    #[cfg(feature = "ollama")]
    Ollama(String),
    /// Model with a provider this crate has no backend for.
    Custom { provider: String, model_id: String },
}

impl LanguageModel {
    /// Get the model's API identifier string.
    pub fn model_id(&self) -> &str {
        match self {
            #[cfg(feature = "openai")]
            Self::OpenAi(m) => m,
            #[cfg(feature = "ollama")]
            Self::Ollama(m) => m,
            Self::Custom { model_id, .. } => model_id,
        }
    }

    /// Get the provider name.
    pub fn provider_name(&self) -> &str {
        match self {
            #[cfg(feature = "openai")]
            Self::OpenAi(_) => "openai",
            #[cfg(feature = "ollama")]
            Self::Ollama(_) => "ollama",
            Self::Custom { provider, .. } => provider,
        }
    }
}

impl fmt::Display for LanguageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider_name(), self.model_id())
    }
}
