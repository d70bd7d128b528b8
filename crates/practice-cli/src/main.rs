use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use practice_application::PracticeLog;
use practice_core::PracticeConfig;

mod command;
mod download;
mod repl;

#[derive(Parser)]
#[command(name = "practice-log")]
#[command(about = "Log practice sessions and export a weekly report", long_about = None)]
struct Cli {
    /// TOML file with report and celebration settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory exported reports are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => PracticeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PracticeConfig::default(),
    };

    let log = PracticeLog::new(config, Local::now().date_naive());
    let mut repl = repl::Repl::new(log, cli.out_dir)?;
    repl.run()
}
