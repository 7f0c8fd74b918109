//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a jumpable move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe in the terminal with a jumpable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config (colors, hints)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output (the terminal is owned by the UI)
    #[arg(long, default_value = "rewind.log")]
    pub log_file: PathBuf,
}
