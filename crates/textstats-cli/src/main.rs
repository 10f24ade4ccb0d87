//! Text Statistics CLI
//!
//! Runs the text statistics stage over documents using a snapshot of
//! precomputed statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use textstats::TextstatsConfig;
use textstats_cli::{column_names, init_logging, read_documents, resolve_settings, run};

#[derive(Parser)]
#[command(name = "textstats")]
#[command(about = "Expose precomputed text statistics as a feature matrix", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the store snapshot path
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the feature matrix for documents as JSON
    Run {
        /// Documents, one per line (`-` for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },

    /// Print the configured feature names
    Columns,

    /// Validate configuration
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = resolve_settings(cli.config.as_deref(), cli.store)?;
    init_logging(&settings);

    let config = TextstatsConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { input } => {
            let documents = read_documents(&input)?;
            let frame = run(&settings, &config, &documents)?;
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Commands::Columns => {
            for name in column_names(&config)? {
                println!("{name}");
            }
        }
        Commands::Validate => {
            let columns = column_names(&config)?;
            info!("Configuration valid: {} columns", columns.len());
            println!("OK");
        }
    }

    Ok(())
}
