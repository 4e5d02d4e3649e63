mod commands;

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use commands::serve::Overrides;

// ============================================================================
// CLI Types
// ============================================================================

/// itemd - a minimal file-backed CRUD service for item records
#[derive(Parser, Debug)]
#[command(version = itemd::build_info::VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(short, long, default_value = "itemd.yaml")]
        config: String,

        /// Host to bind to (overrides config file)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on (overrides config file)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// JSON file holding the item collection (overrides config file)
        #[arg(long, value_name = "PATH")]
        data_file: Option<PathBuf>,

        /// Directory with the frontend assets (overrides config file)
        #[arg(long, value_name = "DIR")]
        public_dir: Option<PathBuf>,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            data_file,
            public_dir,
        } => {
            let overrides = Overrides {
                host,
                port,
                data_file,
                public_dir,
            };
            commands::serve::run(&config, overrides).await
        }
    }
}

// ============================================================================
// Initialization
// ============================================================================

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
