//! domain-agent binary entry point.

use clap::Parser;
use domain_agent::agent::{Agent, Conversation};
use domain_agent::cli::Cli;
use domain_agent::config::AgentConfig;
use domain_agent::domain::Deps;
use domain_agent::models::LanguageModel;
use domain_agent::provider::http::build_client;
use domain_agent::telemetry::{init_tracing, DEFAULT_LOG_FILTER};
use std::time::Duration;

/// Upper bound for any request on the shared client, model calls included.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(120);

#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing(DEFAULT_LOG_FILTER) {
        eprintln!("Warning: {e}");
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AgentConfig::from_env();
    let model: LanguageModel = cli.model.as_deref().unwrap_or(config.model()).parse()?;

    // Dropped when `run` returns, on both the success and error paths.
    let client = build_client(CLIENT_TIMEOUT)?;
    // create a free API key at https://domain-availability.whoisxmlapi.com/api
    let deps = Deps::from_config(client.clone(), &config).with_concurrent_lookups(cli.concurrent);

    let mut agent = Agent::domain_for_model(&model, &config, &client)?
        .with_settings(cli.generation_settings());
    if let Some(retries) = cli.retries {
        agent = agent.with_retries(retries);
    }

    let mut conversation = Conversation::new();
    for prompt in cli.prompts() {
        let turn = conversation.send(&agent, &deps, prompt).await?;
        println!("Response: {}", turn.reply);
    }

    if cli.show_history {
        println!("{}", serde_json::to_string_pretty(conversation.messages())?);
    }

    Ok(())
}
