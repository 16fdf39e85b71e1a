//! Pathways CLI — the main entry point.
//!
//! Commands:
//! - `string`   — Assembly index of a string
//! - `integer`  — Assembly index of a positive integer
//! - `sequence` — Indices of 1..=N under addition
//! - `random`   — Assembly index of a random bit-string
//! - `scaling`  — Length and probability sweeps with a linear fit
//! - `entropy`  — Entropy vs. assembly index scatter
//! - `config`   — Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pathways_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "pathways",
    about = "Pathways — estimate assembly indices",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to ~/.pathways/config.toml)
    #[arg(short, long, global = true, env = "PATHWAYS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assembly index of a string
    String {
        value: String,

        /// Disable memoization
        #[arg(long)]
        no_cache: bool,
    },

    /// Assembly index of a positive integer
    Integer {
        #[arg(allow_negative_numbers = true)]
        value: i64,

        /// Disable memoization
        #[arg(long)]
        no_cache: bool,
    },

    /// Assembly indices of 1..=MAX under addition
    Sequence { max: i64 },

    /// Assembly index of a random bit-string
    Random {
        #[arg(short, long)]
        length: Option<usize>,

        /// Probability of a '1'
        #[arg(short, long)]
        probability: Option<f64>,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Length and probability scaling sweeps
    Scaling {
        /// Strings sampled per data point
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Entropy vs. assembly index
    Entropy {
        /// Strings sampled per probability step
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load_with(cli.config.as_deref())
        .map_err(|e| format!("Failed to load config: {e}"))?;
    let out = commands::Output::new(cli.json);

    match cli.command {
        Commands::String { value, no_cache } => {
            commands::index::string(&config, &out, value, no_cache).await?
        }
        Commands::Integer { value, no_cache } => {
            commands::index::integer(&config, &out, value, no_cache).await?
        }
        Commands::Sequence { max } => commands::index::sequence(&config, &out, max).await?,
        Commands::Random {
            length,
            probability,
            seed,
        } => commands::random::run(&config, &out, length, probability, seed).await?,
        Commands::Scaling { samples, seed } => {
            commands::scaling::run(&config, &out, samples, seed).await?
        }
        Commands::Entropy { samples, seed } => {
            commands::entropy::run(&config, &out, samples, seed).await?
        }
        Commands::Config => commands::config_cmd::run(&config, &out, cli.config.as_deref()).await?,
    }

    Ok(())
}
