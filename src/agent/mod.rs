//! Agent system: configured model, tools and multi-turn conversations.

pub mod agent;
pub mod conversation;

pub use agent::Agent;
pub use conversation::Conversation;
