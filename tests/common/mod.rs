//! Shared test helpers and a scripted mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use domain_agent::error::AgentError;
use domain_agent::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use domain_agent::types::*;

/// A provider that replays queued responses and records every request.
pub struct MockProvider {
    model_id: String,
    responses: Mutex<VecDeque<Result<ProviderResponse, AgentError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl MockProvider {
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a final text response.
    pub fn queue_response(&self, text: &str) {
        self.responses.lock().unwrap().push_back(Ok(ProviderResponse {
            text: text.to_string(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
                requests: 1,
            },
            tool_calls: vec![],
            finish_reason: Some(FinishReason::Stop),
        }));
    }

    /// Queue a tool call response.
    pub fn queue_tool_call(&self, id: &str, name: &str, args: serde_json::Value) {
        self.responses.lock().unwrap().push_back(Ok(ProviderResponse {
            text: String::new(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 5,
                total_tokens: 15,
                requests: 1,
            },
            tool_calls: vec![AgentToolCall {
                id: id.to_string(),
                name: name.to_string(),
                arguments: args,
            }],
            finish_reason: Some(FinishReason::ToolCalls),
        }));
    }

    /// Queue a provider failure.
    pub fn queue_error(&self, error: AgentError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Tool results the model was shown in the last request.
    pub fn last_tool_results(&self) -> Vec<AgentToolResult> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|req| {
                req.messages
                    .iter()
                    .filter_map(|m| m.tool_result_part().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, AgentError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ProviderResponse {
                    text: "Mock response".to_string(),
                    usage: Usage::default(),
                    tool_calls: vec![],
                    finish_reason: Some(FinishReason::Stop),
                })
            })
    }
}
