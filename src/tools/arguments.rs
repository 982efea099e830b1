//! Typed access to tool call arguments.

use crate::error::AgentError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    /// Wrap raw call arguments.
    ///
    /// Some backends send the arguments as a JSON-encoded string; that form
    /// is decoded here, and an empty string means no arguments. A string
    /// that is not JSON is kept as-is so validation can report it.
    pub fn new(value: serde_json::Value) -> Self {
        let value = match value {
            serde_json::Value::String(raw) if raw.trim().is_empty() => serde_json::json!({}),
            serde_json::Value::String(raw) => serde_json::from_str(raw.trim())
                .unwrap_or(serde_json::Value::String(raw)),
            other => other,
        };
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, AgentError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| AgentError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an array argument.
    pub fn get_array(&self, key: &str) -> Result<&Vec<serde_json::Value>, AgentError> {
        self.value
            .get(key)
            .and_then(|v| v.as_array())
            .ok_or_else(|| AgentError::InvalidArgument(format!("Missing array argument: {key}")))
    }

    /// Deserialize the entire arguments into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, AgentError> {
        serde_json::from_value(self.value.clone()).map_err(|e| {
            AgentError::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
        })
    }
}
