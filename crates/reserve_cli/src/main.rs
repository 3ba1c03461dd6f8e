//! Reserve CLI - Command Line Operations for the Fraud-Loss Reserve Engine
//!
//! # Commands
//!
//! - `reserve simulate` - Run one Monte Carlo batch and print a summary
//! - `reserve presets` - List the named scenario presets
//!
//! # Examples
//!
//! ```bash
//! reserve simulate --trials 10000 --avg-events 150 --avg-loss 350 --volatility 40
//! reserve simulate --preset fraud-ring --seed 42 --format json
//! reserve presets
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::simulate::SimulateArgs;

/// Fraud-loss reserve Monte Carlo CLI
#[derive(Parser)]
#[command(name = "reserve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one Monte Carlo simulation batch
    Simulate {
        /// Named scenario preset supplying parameter defaults
        #[arg(long)]
        preset: Option<String>,

        /// Number of monthly trials
        #[arg(short, long)]
        trials: Option<usize>,

        /// Expected fraud events per month
        #[arg(long)]
        avg_events: Option<f64>,

        /// Expected loss per event
        #[arg(long)]
        avg_loss: Option<f64>,

        /// Per-event loss volatility, percent of the average loss
        #[arg(long)]
        volatility: Option<f64>,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Percentile rank for the recommended reserve
        #[arg(long, default_value_t = 95)]
        confidence: u8,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List the named scenario presets
    Presets,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Simulate {
            preset,
            trials,
            avg_events,
            avg_loss,
            volatility,
            seed,
            confidence,
            format,
        } => commands::simulate::run(&SimulateArgs {
            preset,
            trials,
            avg_events,
            avg_loss,
            volatility,
            seed,
            confidence,
            format,
        }),
        Commands::Presets => commands::presets::run(),
    };

    if let Err(err) = outcome {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
