//! domain_agent: an LLM agent with a domain-availability lookup tool.
//!
//! An [`agent::Agent`] wraps a model backend with a system prompt, a retry
//! budget and typed tools. The crate ships one tool,
//! `get_domain_availability`, which checks names against the WhoisXML
//! domain availability API, or reports every name unavailable when no
//! API key is configured.
//!
//! The `domain-agent` binary is behind the `cli` feature
//! (`cargo run --features cli -- --help`).
//!
//! # Quick Start
//!
//! ```no_run
//! use domain_agent::prelude::*;
//!
//! # async fn example() -> domain_agent::error::Result<()> {
//! let config = AgentConfig::from_env();
//! let client = domain_agent::provider::http::build_client(config.request_timeout())?;
//! let model: LanguageModel = config.model().parse()?;
//! let agent = Agent::domain_for_model(&model, &config, &client)?;
//! let deps = Deps::from_config(client.clone(), &config);
//!
//! let result = agent.run("Is the domain google.com available?", &deps, None).await?;
//! println!("{}", result.output);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod domain;
pub mod error;
pub mod generation;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod telemetry;
pub mod tools;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
