//! HAL CLI - teach the engine and talk to it.
//!
//! Usage:
//!   hal learn corpus.txt
//!   hal chat --seed corpus.txt
//!   hal reply "hello there"
//!   hal --redis redis://localhost:6379 clear

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use hal_engine::{Hal, HalConfig, Result};

/// Lines between progress reports while learning a file.
const PROGRESS_EVERY: usize = 100;

#[derive(Parser)]
#[command(name = "hal", version, about = "HAL - a statistical dialogue generator")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use Redis at this URL instead of the configured storage
    #[arg(long, global = true)]
    redis: Option<String>,

    /// Redis key prefix; rejected with in-process storage
    #[arg(long, global = true)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn every line of the given files
    Learn {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Interactive conversation; every line typed is also learned
    Chat {
        /// Learn this file before starting
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Print a single reply
    Reply { text: String },
    /// Forget everything
    Clear,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => HalConfig::load(path).await?,
        None => HalConfig::default(),
    };
    config.override_storage(cli.redis, cli.prefix)?;

    let hal = Hal::connect(config).await?;
    match cli.command {
        Commands::Learn { files } => {
            for file in &files {
                learn_file(&hal, file).await?;
            }
        }
        Commands::Chat { seed } => {
            if let Some(file) = seed {
                learn_file(&hal, &file).await?;
            }
            chat(&hal).await?;
        }
        Commands::Reply { text } => println!("{}", hal.reply(&text).await?),
        Commands::Clear => hal.clear().await?,
    }
    Ok(())
}

async fn learn_file(hal: &Hal, path: &Path) -> Result<()> {
    let file = tokio::fs::File::open(path).await?;
    let mut lines = BufReader::new(file).lines();
    let mut count = 0;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        hal.learn(&line).await?;
        count += 1;
        if count % PROGRESS_EVERY == 0 {
            tracing::info!(path = %path.display(), lines = count, "learning");
        }
    }
    tracing::info!(path = %path.display(), lines = count, "learned file");
    Ok(())
}

async fn chat(hal: &Hal) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let greeting = hal.reply("").await?;
    stdout.write_all(format!("{}\n> ", greeting).as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let reply = hal.reply(&line).await?;
        stdout.write_all(format!("{}\n> ", reply).as_bytes()).await?;
        stdout.flush().await?;
        hal.learn(&line).await?;
    }
    Ok(())
}
