//! Configuration system (layered: code > env > `.env` file).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::DOMAIN_AVAILABILITY_API_ENDPOINT;
use crate::models::DEFAULT_MODEL;

/// Default per-request timeout for outgoing HTTP calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Layered configuration for the agent and its tool.
///
/// Provider credentials and base URLs are keyed by provider name
/// (`"openai"`, `"ollama"`); the domain-availability settings are fixed
/// fields since only one tool exists.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    api_keys: Arc<RwLock<HashMap<String, String>>>,
    base_urls: Arc<RwLock<HashMap<String, String>>>,
    model: String,
    domain_api_key: Option<String>,
    domain_api_endpoint: String,
    request_timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentConfig {
    /// Create a config with defaults and no credentials.
    pub fn new() -> Self {
        Self {
            api_keys: Arc::new(RwLock::new(HashMap::new())),
            base_urls: Arc::new(RwLock::new(HashMap::new())),
            model: DEFAULT_MODEL.to_string(),
            domain_api_key: None,
            domain_api_endpoint: DOMAIN_AVAILABILITY_API_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        let key_mappings = [("OPENAI_API_KEY", "openai"), ("OLLAMA_API_KEY", "ollama")];
        for (env_var, provider) in &key_mappings {
            if let Some(key) = lookup(env_var) {
                config.set_api_key(provider, key);
            }
        }

        let url_mappings = [("OPENAI_BASE_URL", "openai"), ("OLLAMA_BASE_URL", "ollama")];
        for (env_var, provider) in &url_mappings {
            if let Some(url) = lookup(env_var) {
                config.set_base_url(provider, url);
            }
        }

        if let Some(model) = lookup("DOMAIN_AGENT_MODEL") {
            config.model = model;
        }
        config.domain_api_key = lookup("DOMAIN_API_KEY").filter(|k| !k.is_empty());
        if let Some(endpoint) = lookup("DOMAIN_API_ENDPOINT") {
            config.domain_api_endpoint = endpoint;
        }
        match lookup("DOMAIN_API_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) => config.request_timeout = Duration::from_secs(secs),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Ignoring invalid DOMAIN_API_TIMEOUT_SECS");
            }
            None => {}
        }

        config
    }

    pub fn set_api_key(&self, provider: &str, key: String) {
        if let Ok(mut keys) = self.api_keys.write() {
            keys.insert(provider.to_string(), key);
        }
    }

    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        self.api_keys.read().ok()?.get(provider).cloned()
    }

    pub fn set_base_url(&self, provider: &str, url: String) {
        if let Ok(mut urls) = self.base_urls.write() {
            urls.insert(provider.to_string(), url);
        }
    }

    pub fn get_base_url(&self, provider: &str) -> Option<String> {
        self.base_urls.read().ok()?.get(provider).cloned()
    }

    /// Model selector string, e.g. `ollama:llama3.2`.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// API key for the domain-availability service, if configured.
    pub fn domain_api_key(&self) -> Option<&str> {
        self.domain_api_key.as_deref()
    }

    pub fn with_domain_api_key(mut self, key: Option<String>) -> Self {
        self.domain_api_key = key;
        self
    }

    pub fn domain_api_endpoint(&self) -> &str {
        &self.domain_api_endpoint
    }

    pub fn with_domain_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.domain_api_endpoint = endpoint.into();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
