//! Quest CLI entry point.
//!
//! Validates configuration at the boundary, selects the search backend,
//! then hands off to the research coordinator. The pipeline itself is
//! never invoked when required credentials are missing.

use anyhow::bail;
use clap::Parser;
use owo_colors::OwoColorize;
use quest::cli::Cli;
use quest::llm::OpenAIClient;
use quest::research::ResearchCoordinator;
use quest::tools::{ExaSearch, SearchProvider, StubSearch};
use quest::utils::Config;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::from_env();

    // Validate environment before the pipeline exists.
    if !cli.stub {
        if config.openai_api_key.is_none() {
            bail!("OPENAI_API_KEY is not set. Use --stub for offline mode.");
        }
        if config.exa_api_key.is_none() {
            bail!(
                "EXA_API_KEY is not set. \
                 Use --stub for offline mode or set the environment variable."
            );
        }
    }

    let search: Arc<dyn SearchProvider> = if cli.stub {
        Arc::new(StubSearch)
    } else {
        Arc::new(ExaSearch::new(config.exa_api_key.clone().unwrap_or_default()))
    };

    let llm = Arc::new(OpenAIClient::new(
        config.openai_api_key.unwrap_or_default(),
        config.openai_api_base,
        cli.model,
    ));

    let mut coordinator = ResearchCoordinator::new(llm, search, cli.max_sub_questions);

    println!("\nResearch question: {}\n", cli.question.bold());
    println!("{}", "=".repeat(72));

    let report = coordinator.run(&cli.question).await?;

    println!("{}", report);
    println!("{}", "=".repeat(72));

    Ok(())
}
