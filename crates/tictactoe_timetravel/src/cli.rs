//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

use crate::{AppConfig, ConfigError, SortOrder};

/// Tic-tac-toe in the terminal, with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the move list sorted latest-first
    #[arg(long)]
    pub descending: bool,
}

impl Cli {
    /// Loads the config file (if any) and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.descending {
            config = config.with_sort_order(SortOrder::Descending);
        }
        Ok(config)
    }
}
