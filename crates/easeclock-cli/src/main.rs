use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use easeclock_core::AppConfig;

mod commands;

use commands::TimerArgs;

#[derive(Parser)]
#[command(name = "easeclock")]
#[command(author, version, about = "Inspect easing curves and drive animation timers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ~/.config/easeclock/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the easing catalog
    Curves,
    /// Evaluate a timer at evenly spaced instants
    Sample {
        #[command(flatten)]
        timer: TimerArgs,
        /// Number of intervals to sample
        #[arg(short = 'n', long, default_value_t = 10)]
        samples: u32,
        /// Print one JSON object per sample
        #[arg(long)]
        json: bool,
    },
    /// Play a timer in real time and print its position every frame
    Watch {
        #[command(flatten)]
        timer: TimerArgs,
        /// Pause after this many milliseconds
        #[arg(long)]
        pause_at: Option<u64>,
        /// Resume after this many milliseconds
        #[arg(long)]
        resume_at: Option<u64>,
        /// Play backwards after this many milliseconds
        #[arg(long)]
        reverse_at: Option<u64>,
        /// Print one JSON object per frame
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Curves => commands::curves::run(),
        Commands::Sample {
            timer,
            samples,
            json,
        } => commands::sample::run(&config, &timer, samples, json),
        Commands::Watch {
            timer,
            pause_at,
            resume_at,
            reverse_at,
            json,
        } => {
            let schedule = commands::watch::Schedule {
                pause_at,
                resume_at,
                reverse_at,
            };
            commands::watch::run(&config, &timer, schedule, json).await
        }
    }
}
