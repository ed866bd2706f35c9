use anyhow::Result;
use clap::{Parser, Subcommand};
use convoy_core::Config;
use std::path::PathBuf;
use std::time::Duration;

mod commands;

#[derive(Parser)]
#[command(name = "convoy")]
#[command(about = "Workload migration tracker CLI", long_about = None)]
struct Cli {
    /// Record storage root (defaults to the configured directory)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a migration from a JSON record
    Run {
        /// Path to a JSON file with migration parameters
        #[arg(long = "data", value_name = "PATH")]
        data: PathBuf,
    },

    /// List stored migration records
    Ls,

    /// Remove migration records by source IP key
    Rm {
        /// Record keys (dotted source IPs)
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let storage_dir = cli.storage_dir.unwrap_or_else(|| PathBuf::from(&config.storage_dir));

    match cli.command {
        Commands::Run { data } => {
            commands::run::run(&data, Duration::from_millis(config.transfer_delay_ms)).await
        }
        Commands::Ls => commands::ls::ls(&storage_dir).await,
        Commands::Rm { keys } => commands::rm::rm(&storage_dir, &keys).await,
    }
}
