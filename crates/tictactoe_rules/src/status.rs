//! Status line derivation.

use super::rules::{check_winner, is_full};
use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the displayed board.
///
/// The `Display` impl renders the status line shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Three in a row for this mark.
    #[display("Winner: {_0}")]
    Won(Mark),
    /// Every square is occupied and nobody won.
    #[display("It's a draw!")]
    Draw,
    /// The game continues with `next` to move.
    #[display("Next player: {next}")]
    InProgress {
        /// Mark to move.
        next: Mark,
    },
}

impl GameStatus {
    /// Evaluates the status of `board` when `next` is the mark to move.
    ///
    /// A winner takes priority over a full board.
    #[instrument]
    pub fn evaluate(board: &Board, next: Mark) -> Self {
        if let Some(win) = check_winner(board) {
            GameStatus::Won(win.mark)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}
