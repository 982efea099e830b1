//! Error types for the domain agent.

use thiserror::Error;

/// Primary error type for all agent and tool operations.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Tool execution error: {tool_name}: {source}")]
    ToolExecution {
        tool_name: String,
        #[source]
        source: Box<AgentError>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unexpected model behavior: {0}")]
    UnexpectedModelBehavior(String),
}

/// Broad error category for routing retry logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
    ToolExecution,
    ModelBehavior,
    Unknown,
}

impl AgentError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Wrap an error raised inside a tool.
    pub fn tool(tool_name: impl Into<String>, source: AgentError) -> Self {
        Self::ToolExecution {
            tool_name: tool_name.into(),
            source: Box::new(source),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Network(e) => match e.status().map(|s| s.as_u16()) {
                Some(401 | 403) => ErrorCategory::Authentication,
                Some(429) => ErrorCategory::RateLimit,
                Some(500..=599) => ErrorCategory::Server,
                Some(_) => ErrorCategory::Api,
                None => ErrorCategory::Network,
            },
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Configuration(_) | Self::ModelNotFound(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::ToolExecution { .. } => ErrorCategory::ToolExecution,
            Self::UnexpectedModelBehavior(_) => ErrorCategory::ModelBehavior,
            Self::InvalidArgument(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is a transient transport failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
        )
    }

    /// Whether an agent run that failed with this error may be re-attempted.
    ///
    /// Tool failures and malformed model output count against the run's
    /// retry budget in addition to transient transport errors. A tool that
    /// failed on credentials or configuration fails the run immediately.
    pub fn retries_run(&self) -> bool {
        match self {
            Self::ToolExecution { source, .. } => !matches!(
                source.category(),
                ErrorCategory::Authentication | ErrorCategory::Configuration
            ),
            Self::UnexpectedModelBehavior(_) => true,
            _ => self.is_retryable(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_maps_to_category() {
        assert_eq!(AgentError::api(401, "no").category(), ErrorCategory::Authentication);
        assert_eq!(AgentError::api(429, "slow").category(), ErrorCategory::RateLimit);
        assert_eq!(AgentError::api(503, "down").category(), ErrorCategory::Server);
        assert_eq!(AgentError::api(404, "gone").category(), ErrorCategory::Api);
    }

    #[test]
    fn tool_errors_retry_the_run_but_are_not_transient() {
        let err = AgentError::tool("get_domain_availability", AgentError::api(400, "bad"));
        assert!(!err.is_retryable());
        assert!(err.retries_run());
        assert!(err.to_string().contains("get_domain_availability"));
    }

    #[test]
    fn tool_credential_failures_end_the_run() {
        let rejected = AgentError::tool(
            "get_domain_availability",
            AgentError::Authentication("bad key".into()),
        );
        assert!(!rejected.retries_run());
        let forbidden = AgentError::tool("get_domain_availability", AgentError::api(403, "no"));
        assert!(!forbidden.retries_run());
        let misconfigured =
            AgentError::tool("get_domain_availability", AgentError::Configuration("x".into()));
        assert!(!misconfigured.retries_run());
    }

    #[test]
    fn configuration_errors_never_retry() {
        let err = AgentError::Configuration("missing".into());
        assert!(!err.is_retryable());
        assert!(!err.retries_run());
    }

    #[test]
    fn timeouts_are_retryable() {
        assert!(AgentError::Timeout(5000).is_retryable());
    }
}
