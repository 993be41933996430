use chromaqa::cli::handlers;
use chromaqa::cli::Cli;
use chromaqa::cli::Commands;
use chromaqa::config::AppConfig;
use chromaqa::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    if cli.verbose {
        chromaqa::logging::init_logging_with_level("debug")?;
    } else {
        chromaqa::logging::init_logging_with_level(&config.logging.level)?;
    }
    info!("Configuration loaded successfully");

    // Required fields are checked before any network call
    config.validate()?;

    // Execute the requested command
    match cli.command {
        Commands::Ingest {
            json_file,
            batch_size,
        } => {
            handlers::handle_ingest_command(&config, &json_file, batch_size).await?;
        }
        Commands::Query { query, limit } => {
            handlers::handle_query_command(&config, query, limit).await?;
        }
        Commands::Collections(command) => {
            handlers::handle_collections_command(&config, command).await?;
        }
        Commands::Config => {
            handlers::handle_config_command(&config);
        }
    }

    Ok(())
}
