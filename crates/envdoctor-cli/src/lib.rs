//! Command-line interface for the envdoctor environment verification utility.

use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser, Subcommand};
use once_cell::sync::OnceCell;

use envdoctor_core::config::DoctorConfig;

mod commands;
mod output;

pub use commands::*;
pub use output::*;

static LOGGING: OnceCell<()> = OnceCell::new();

fn init_logging(verbose: bool) {
    let _ = LOGGING.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(
                    if verbose {
                        tracing::Level::DEBUG.into()
                    } else {
                        tracing::Level::WARN.into()
                    },
                ),
            )
            .with_target(false)
            .with_writer(std::io::stderr);

        let _ = builder.try_init();
    });
}

/// CLI arguments parser
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every registered probe and print the report
    Check,

    /// List registered probes without running them
    List,
}

/// Run the CLI application
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Load config, or fall back to the built-in probe set
    let config = if let Some(path) = cli.config {
        DoctorConfig::from_file(path)?
    } else {
        DoctorConfig::default()
    };

    // Execute command; a bare invocation runs the full check
    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => {
            commands::execute_check(&config).await?;
        }
        Commands::List => {
            commands::execute_list(&config).await?;
        }
    }

    Ok(())
}
