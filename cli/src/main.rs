//! # hotel-tools CLI
//!
//! Command-line interface for hotel-tools.
//!
//! ## Usage
//!
//! - `hotel-tools tools` - Show available tools
//! - `hotel-tools definitions` - Print function-calling definitions as JSON
//! - `hotel-tools call <tool> --args '<json>'` - Invoke one tool

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use commands::{call_command, definitions_command, tools_command};
use config::CliConfigLoader;

/// hotel-tools - Amadeus hotel search and booking tools
#[derive(Parser)]
#[command(name = "hotel-tools")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Amadeus hotel listing, search and booking as callable tools")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, env = "HOTEL_TOOLS_CONFIG")]
    config: Option<PathBuf>,

    /// Client id override
    #[arg(long)]
    client_id: Option<String>,

    /// Client secret override
    #[arg(long)]
    client_secret: Option<String>,

    /// Base URL override
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show available tools
    Tools,

    /// Print tool definitions for function calling
    Definitions,

    /// Invoke a tool and print its result envelope
    Call {
        /// Tool name
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(client_id) = &cli.client_id {
        loader = loader.with_client_id_override(client_id.clone());
    }

    if let Some(client_secret) = &cli.client_secret {
        loader = loader.with_client_secret_override(client_secret.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if std::env::var_os("RUST_LOG").is_some() {
        hotel_tools_core::init_tracing();
    } else {
        hotel_tools_core::init_tracing_with_debug(cli.verbose);
    }

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Commands::Tools => tools_command().await,
        Commands::Definitions => definitions_command().await,
        Commands::Call { tool, args } => {
            let result = call_command(config_loader, tool, args).await?;
            if !result.is_success() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
