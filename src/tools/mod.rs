//! Tool system for function calling.

pub mod arguments;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use tool::{AgentTool, RunContext, Tool};
pub use types::AgentToolParameters;
