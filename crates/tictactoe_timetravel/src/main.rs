//! Tic-tac-toe with time-travel, in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_timetravel::{Cli, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    tui::init_tracing(&config)?;
    info!(?config, "Configuration resolved");

    tui::run_tui(&config)
}
