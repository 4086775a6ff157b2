//! # emerald
//!
//! Command-line entry points for the cycle analysis stack. Every subcommand
//! reads one configuration document and writes its artifacts under
//! `output_dir`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "emerald")]
#[command(about = "Spectral cycle scan and harmonic resonance toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the series for dominant cycles
    Scan {
        /// Configuration file (YAML, or TOML when the name ends in .toml)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,
    },

    /// Project the harmonic composite past the last observation
    Forecast {
        /// Configuration file (YAML, or TOML when the name ends in .toml)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,
    },

    /// Compute the unified resonance index and its components
    Resonance {
        /// Configuration file (YAML, or TOML when the name ends in .toml)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,
    },

    /// Draw the harmonic wheel
    Wheel {
        /// Configuration file (YAML, or TOML when the name ends in .toml)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emerald=info,cycle_core=info,data_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { config } => commands::scan::run(&AppConfig::load(&config)?),
        Commands::Forecast { config } => commands::forecast::run(&AppConfig::load(&config)?),
        Commands::Resonance { config } => commands::resonance::run(&AppConfig::load(&config)?),
        Commands::Wheel { config } => commands::wheel::run(&AppConfig::load(&config)?),
    }
}
