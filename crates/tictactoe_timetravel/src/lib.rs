//! Terminal tic-tac-toe with move history and time-travel.
//!
//! # Architecture
//!
//! - **GameController**: owns the move history, the displayed move and the
//!   move-list order; the only place game state changes
//! - **BoardView** / **CellView**: stateless views derived from the
//!   displayed board; cells emit [`Action`]s bound to their position
//! - **tui**: ratatui rendering, keyboard and mouse input, event loop
//!
//! # Example
//!
//! ```
//! use tictactoe_timetravel::{Action, GameController, SortOrder};
//! use tictactoe_rules::Position;
//!
//! let mut game = GameController::new(SortOrder::Ascending);
//! game.dispatch(Action::ClickCell(Position::Center));
//! game.dispatch(Action::ClickCell(Position::TopLeft));
//! game.dispatch(Action::JumpTo(1));
//! assert_eq!(game.status().to_string(), "Next player: O");
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod cli;
mod config;
mod controller;
pub mod tui;

pub use action::Action;
pub use board::BoardView;
pub use cell::CellView;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use controller::{GameController, HistoryEntry, MoveListItem, SortOrder};
