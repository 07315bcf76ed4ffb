//! CLI frontend for SkateQuest challenge progression.

mod commands;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sq",
    about = "SkateQuest: challenges, XP, levels, and daily streaks",
    version,
    propagate_version = true
)]
struct Cli {
    /// Challenge catalog JSON file (default: built-in starter challenges)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the challenges in the catalog
    Catalog {
        /// Only show one difficulty tier (easy, medium, hard, insane)
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Draw a daily challenge rotation
    Daily {
        /// Number of challenges in the rotation
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,

        /// RNG seed for a reproducible rotation
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Start an interactive progression session
    Play {
        /// RNG seed for reproducible daily rotations
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of challenges in each daily rotation
        #[arg(short = 'n', long, default_value = "3")]
        daily_count: usize,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = cli.catalog.as_deref();
    let result = match cli.command {
        Commands::Catalog { difficulty } => commands::catalog::run(catalog, difficulty.as_deref()),
        Commands::Daily { count, seed } => commands::daily::run(catalog, count, seed),
        Commands::Play { seed, daily_count } => commands::play::run(catalog, seed, daily_count),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
