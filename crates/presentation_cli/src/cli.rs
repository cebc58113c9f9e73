//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// weatherapp CLI
#[derive(Debug, Parser)]
#[command(name = "weatherapp")]
#[command(author, version, about = "Weather from scraped provider sites", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log failures with full detail
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print collected metrics to stderr on exit (Prometheus text format)
    #[arg(long, global = true)]
    pub metrics: bool,

    /// Configuration file (default: ./weatherapp.toml if present)
    #[arg(short, long, env = "WEATHERAPP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available weather providers
    Providers,

    /// Choose a provider's location interactively
    Configure {
        /// Provider name (default: the first provider)
        provider: Option<String>,
    },

    /// Show weather at the configured location
    Weather {
        /// Provider name (default: the first provider)
        provider: Option<String>,

        /// Show tomorrow's forecast instead of today's weather
        #[arg(short, long)]
        tomorrow: bool,

        /// Print the weather mapping as JSON
        #[arg(long)]
        json: bool,
    },
}
