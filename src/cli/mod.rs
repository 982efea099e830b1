//! CLI argument definitions.

use clap::Parser;

use crate::types::GenerationSettings;

/// Question asked when none is given on the command line.
pub const DEFAULT_QUESTION: &str = "Is the domain google.com available?";

/// Ask an LLM agent about domain-name availability.
#[derive(Parser, Debug)]
#[command(name = "domain-agent", version, about)]
pub struct Cli {
    /// Opening question for the agent
    #[arg(default_value = DEFAULT_QUESTION)]
    pub prompt: String,

    /// Follow-up request sent with the previous history (repeatable)
    #[arg(long = "follow-up", value_name = "TEXT")]
    pub follow_ups: Vec<String>,

    /// Model as provider:model (overrides DOMAIN_AGENT_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Retry budget for each run
    #[arg(long)]
    pub retries: Option<u32>,

    /// Look up several domains concurrently
    #[arg(long)]
    pub concurrent: bool,

    /// Print the accumulated message history as JSON after the last reply
    #[arg(long)]
    pub show_history: bool,

    /// Sampling temperature
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Maximum tokens per model reply
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// All prompts in the order they are sent.
    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.prompt.as_str()).chain(self.follow_ups.iter().map(String::as_str))
    }

    /// Generation settings from the sampling flags.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .maybe_temperature(self.temperature)
            .maybe_max_tokens(self.max_tokens)
            .maybe_seed(self.seed)
            .build()
    }
}
