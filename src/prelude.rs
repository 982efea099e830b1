//! Convenience re-exports for common use.

pub use crate::agent::{Agent, Conversation};
pub use crate::config::AgentConfig;
pub use crate::domain::{Availability, Deps, DomainInfo};
pub use crate::error::{AgentError, Result};
pub use crate::models::LanguageModel;
pub use crate::provider::ModelProvider;
pub use crate::tools::{AgentTool, AgentToolParameters, RunContext, Tool, ToolArguments};
pub use crate::types::{ConversationTurn, ModelMessage, Role, RunResult};
