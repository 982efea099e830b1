//! Conversation history threaded across agent runs.

use crate::error::AgentError;
use crate::types::{ConversationTurn, ModelMessage};

use super::Agent;

/// Owns the message history between runs and feeds it to the next one.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ModelMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue from an existing history.
    pub fn from_messages(messages: Vec<ModelMessage>) -> Self {
        Self { messages }
    }

    /// Run `user_text` against `agent` with the current history.
    ///
    /// On success the history is replaced by the run's full message list; on
    /// failure it is left untouched.
    pub async fn send<D>(
        &mut self,
        agent: &Agent<D>,
        deps: &D,
        user_text: impl Into<String>,
    ) -> Result<ConversationTurn, AgentError>
    where
        D: Clone + Send + Sync + 'static,
    {
        let user_text = user_text.into();
        let result = agent
            .run(user_text.clone(), deps, Some(&self.messages))
            .await?;
        let reply = result.output.clone();
        self.messages = result.into_messages();
        Ok(ConversationTurn {
            user_text,
            reply,
            messages: self.messages.clone(),
        })
    }

    /// Get all messages.
    pub fn messages(&self) -> &[ModelMessage] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
