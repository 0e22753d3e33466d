//! First-class input actions.
//!
//! Every user activation the game recognises becomes one of these values
//! before it reaches [`GameController::dispatch`](crate::GameController::dispatch).
//! Cells, move-list rows and the sort control each carry the action they
//! emit, bound when the view is built.

use serde::{Deserialize, Serialize};
use tictactoe_rules::Position;

/// A user activation routed to the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// A board cell was activated.
    #[display("click {_0}")]
    ClickCell(Position),
    /// A move-list entry was activated; the payload is the history index.
    #[display("jump to move #{_0}")]
    JumpTo(usize),
    /// The sort control was activated.
    #[display("toggle sort")]
    ToggleSort,
}
