//! Pure tic-tac-toe rules.
//!
//! Board storage, the fixed table of winning lines, win and draw detection,
//! and the status line derived from a board snapshot. No I/O and no mutable
//! game state live here; the application crate owns history.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
pub mod rules;
mod status;
mod types;

pub use position::Position;
pub use rules::{LINES, WinningLine, check_winner, is_draw, is_full};
pub use status::GameStatus;
pub use types::{Board, Mark, Square};
