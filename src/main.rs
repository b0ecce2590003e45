//! Hero Timeline CLI
//!
//! Converts every combat log in a directory into a per-hero timeline document.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use hero_timeline::commands::{check_output_file, execute_convert, ConvertArgs};

/// Hero Timeline - per-hero networth, items and positions from replay logs
#[derive(Parser, Debug)]
#[command(name = "hero-timeline")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing .txt combat logs
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Print a per-hero summary after each file
    #[arg(long)]
    summary: bool,

    /// Validate an existing timeline JSON instead of converting
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Some(file) = cli.check {
        check_output_file(&file)?;
        return Ok(());
    }

    let args = ConvertArgs {
        input_dir: cli.dir,
        print_summary: cli.summary,
    };
    execute_convert(&args)?;

    Ok(())
}
