//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on an N×N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (N for an N×N grid); overrides the config file
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
