//! condense CLI
//!
//! Main entry point for the condense command-line tool: summarize local
//! documents with a local language model, in one shot or conversationally.

mod commands;
mod extract;

use clap::{Parser, Subcommand};
use commands::{ChatCommand, ExtractCommand, SummarizeCommand};
use condense_core::{config::AppConfig, logging, AppResult};
use condense_llm::{create_client, Generator};
use std::path::PathBuf;

/// condense - summarize documents with a local language model
#[derive(Parser, Debug)]
#[command(name = "condense")]
#[command(about = "Summarize documents with a local language model", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "CONDENSE_CONFIG")]
    config: Option<PathBuf>,

    /// Model runtime provider (ollama, llama-server)
    #[arg(short, long, global = true, env = "CONDENSE_PROVIDER")]
    provider: Option<String>,

    /// Model runtime endpoint URL
    #[arg(short, long, global = true, env = "CONDENSE_ENDPOINT")]
    endpoint: Option<String>,

    /// Model identifier (Ollama model name or GGUF path)
    #[arg(short, long, global = true, env = "CONDENSE_MODEL")]
    model: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a document in one shot
    Summarize(SummarizeCommand),

    /// Chat over a document with summary commands
    Chat(ChatCommand),

    /// Extract and print a document's plain text
    Extract(ExtractCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for config and logging)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load(cli.config.clone())?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.provider,
        cli.endpoint,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("condense starting");
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    // Fail fast on bad configuration; every generation depends on it
    config.validate()?;

    let command_name = match &cli.command {
        Commands::Summarize(_) => "summarize",
        Commands::Chat(_) => "chat",
        Commands::Extract(_) => "extract",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers; the model handle is built once here and
    // passed explicitly into the pipeline
    let result = match cli.command {
        Commands::Summarize(cmd) => {
            let generator = build_generator(&config)?;
            cmd.execute(&config, generator).await
        }
        Commands::Chat(cmd) => {
            let generator = build_generator(&config)?;
            cmd.execute(&config, generator).await
        }
        Commands::Extract(cmd) => cmd.execute().await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}

/// Build the generator handle from the validated configuration.
fn build_generator(config: &AppConfig) -> AppResult<Generator> {
    let client = create_client(&config.provider, config.endpoint.as_deref())?;
    Ok(Generator::new(
        client,
        config.model.clone(),
        config.sampling,
        config.runtime,
    ))
}
