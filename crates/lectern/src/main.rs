//! Lectern CLI - validated site configuration for documentation websites.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod watcher;

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Validate and export documentation site configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter site.toml and sidebars.toml
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the config and report every problem
    Check,

    /// Validate the config and write it for the site generator
    Export {
        /// Output file, or "-" for stdout
        #[arg(short, long, default_value = "site.config.json")]
        output: PathBuf,

        /// Year substituted into the footer copyright (defaults to this year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Re-validate whenever the config or sidebar files change
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Check => {
            commands::check::run(&cli.config).await?;
        }
        Commands::Export { output, year } => {
            commands::export::run(&cli.config, &output, year).await?;
        }
        Commands::Watch => {
            commands::watch::run(&cli.config).await?;
        }
    }

    Ok(())
}
