//! Dependency bundle handed to the domain tool.

use std::fmt;
use std::time::Duration;

use crate::config::AgentConfig;

use super::DOMAIN_AVAILABILITY_API_ENDPOINT;

/// Resources the domain tool needs: the shared HTTP client and the
/// optional API key. Built once by the caller and cloned into each run.
///
/// A missing API key is a valid state: lookups then return placeholder
/// records without touching the network.
#[derive(Clone)]
pub struct Deps {
    client: reqwest::Client,
    domain_api_key: Option<String>,
    endpoint: String,
    request_timeout: Option<Duration>,
    concurrent_lookups: bool,
}

impl Deps {
    pub fn new(client: reqwest::Client, domain_api_key: Option<String>) -> Self {
        Self {
            client,
            domain_api_key,
            endpoint: DOMAIN_AVAILABILITY_API_ENDPOINT.to_string(),
            request_timeout: None,
            concurrent_lookups: false,
        }
    }

    /// Build from loaded configuration.
    pub fn from_config(client: reqwest::Client, config: &AgentConfig) -> Self {
        Self::new(client, config.domain_api_key().map(str::to_string))
            .with_endpoint(config.domain_api_endpoint())
            .with_request_timeout(config.request_timeout())
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Per-request timeout for availability lookups.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Issue per-domain lookups concurrently; results keep input order.
    pub fn with_concurrent_lookups(mut self, concurrent: bool) -> Self {
        self.concurrent_lookups = concurrent;
        self
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn domain_api_key(&self) -> Option<&str> {
        self.domain_api_key.as_deref()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn concurrent_lookups(&self) -> bool {
        self.concurrent_lookups
    }
}

impl fmt::Debug for Deps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deps")
            .field("domain_api_key", &self.domain_api_key.as_ref().map(|_| ".."))
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .field("concurrent_lookups", &self.concurrent_lookups)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_api_key() {
        let deps = Deps::new(reqwest::Client::new(), Some("at_secret".into()));
        let printed = format!("{deps:?}");
        assert!(!printed.contains("at_secret"));
    }

    #[test]
    fn from_config_copies_domain_settings() {
        let config = AgentConfig::new()
            .with_domain_api_key(Some("k".into()))
            .with_domain_api_endpoint("http://127.0.0.1:1/api")
            .with_request_timeout(Duration::from_secs(3));
        let deps = Deps::from_config(reqwest::Client::new(), &config);
        assert_eq!(deps.domain_api_key(), Some("k"));
        assert_eq!(deps.endpoint(), "http://127.0.0.1:1/api");
        assert_eq!(deps.request_timeout(), Some(Duration::from_secs(3)));
        assert!(!deps.concurrent_lookups());
    }
}
