//! tictactoe - play on an N×N board in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Game, GameConfig};
use tictactoe_engine::Board;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref(), cli.size)?;
    info!(size = config.size(), "Starting tictactoe");

    let board = Board::new(config.size())?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = Game::new(board, stdin.lock(), stdout.lock());

    let summary = game.run()?;
    info!(
        games = summary.games(),
        x_wins = summary.x_wins(),
        o_wins = summary.o_wins(),
        draws = summary.draws(),
        "Goodbye"
    );
    Ok(())
}
