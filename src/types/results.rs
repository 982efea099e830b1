//! Agent run result types.

use serde::{Deserialize, Serialize};

use super::generation::FinishReason;
use super::message::{AgentToolCall, AgentToolResult, ModelMessage};
use super::usage::Usage;

/// Result of a single `Agent::run` call.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Final reply text.
    pub output: String,
    /// Full message history: the history passed in plus this run's exchange.
    pub messages: Vec<ModelMessage>,
    /// Index into `messages` where this run's exchange starts.
    pub new_message_index: usize,
    /// Model calls made during the successful attempt.
    pub steps: Vec<GenerationStep>,
    /// Aggregated usage across the successful attempt.
    pub usage: Usage,
    /// Why the final step finished.
    pub finish_reason: Option<FinishReason>,
    /// Attempts spent before this result, including the successful one.
    pub attempts: u32,
}

impl RunResult {
    /// Messages to hand to the next `run` call.
    pub fn all_messages(&self) -> &[ModelMessage] {
        &self.messages
    }

    /// Only the messages produced by this run.
    pub fn new_messages(&self) -> &[ModelMessage] {
        &self.messages[self.new_message_index..]
    }

    /// Consume the result, keeping only the history.
    pub fn into_messages(self) -> Vec<ModelMessage> {
        self.messages
    }
}

/// A single generation step (one model call).
#[derive(Debug, Clone)]
pub struct GenerationStep {
    /// Text generated in this step.
    pub text: String,
    /// Tool calls made in this step, if any.
    pub tool_calls: Vec<AgentToolCall>,
    /// Tool results returned in this step, if any.
    pub tool_results: Vec<AgentToolResult>,
    /// Token usage for this step.
    pub usage: Usage,
    /// Finish reason for this step.
    pub finish_reason: Option<FinishReason>,
}

/// One user exchange as seen by the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user_text: String,
    pub reply: String,
    pub messages: Vec<ModelMessage>,
}

/// Result of one pass through the tool loop.
#[derive(Debug, Clone)]
pub struct GenerateTextResult {
    /// Final generated text.
    pub text: String,
    /// All generation steps (multi-step if tools were used).
    pub steps: Vec<GenerationStep>,
    /// Full message history including tool interactions.
    pub messages: Vec<ModelMessage>,
    /// Aggregated usage across all steps.
    pub usage: Usage,
    /// Why the final step finished.
    pub finish_reason: Option<FinishReason>,
}
