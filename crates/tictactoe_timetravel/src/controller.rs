//! Game controller - owns move history, the displayed move and sort order.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_rules::{Board, GameStatus, Mark, Position, WinningLine, check_winner};
use tracing::{debug, info, instrument, warn};

use crate::{Action, BoardView};

/// One snapshot in the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Square played to reach this board; `None` for the start entry.
    position: Option<Position>,
}

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Latest move first.
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveListItem {
    /// History index this row jumps to.
    move_number: usize,
    /// Row text.
    label: String,
    /// True for the move currently displayed.
    is_current: bool,
}

impl MoveListItem {
    /// Action emitted when the row is activated.
    pub fn activate(&self) -> Action {
        Action::JumpTo(self.move_number)
    }
}

/// State machine for a single game with time-travel.
///
/// History always starts with the empty board, and `current_move` always
/// indexes into it. Everything else (board, mover, winner, status, move
/// list) is derived on demand from those two fields and the sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    history: Vec<HistoryEntry>,
    current_move: usize,
    sort_order: SortOrder,
}

impl GameController {
    /// Creates a controller at game start.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::new(Board::new(), None)],
            current_move: 0,
            sort_order,
        }
    }

    /// Full move history, game start first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed history entry.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board of the displayed history entry.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// Mark to move on the displayed board.
    pub fn next_mark(&self) -> Mark {
        Mark::to_move_after(self.current_move)
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner(self.current_board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        self.board_view().status()
    }

    /// View over the displayed board with the winning line highlighted.
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView::new(self.current_board(), self.next_mark(), self.winning_line())
    }

    /// Routes one user action to the matching operation.
    #[instrument(skip_all, fields(%action))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ClickCell(position) => self.click(position),
            Action::JumpTo(move_index) => self.jump_to(move_index),
            Action::ToggleSort => self.toggle_sort(),
        }
    }

    /// Clicks a square on the displayed board.
    ///
    /// Illegal clicks are dropped by [`BoardView::click`] and leave the
    /// controller unchanged.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) {
        let board = *self.current_board();
        let view = BoardView::new(&board, self.next_mark(), check_winner(&board));
        view.click(position, |next, pos| self.apply_move(next, pos));
    }

    /// Appends a move after the displayed entry.
    ///
    /// Any entries after the displayed one are discarded first, so playing
    /// from an earlier move replaces the abandoned future.
    #[instrument(skip(self, board))]
    pub fn apply_move(&mut self, board: Board, position: Position) {
        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating history after current move");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry::new(board, Some(position)));
        self.current_move = self.history.len() - 1;
        info!(
            move_number = self.current_move,
            %position,
            status = %self.status(),
            "Move applied"
        );
    }

    /// Displays history entry `move_index` without altering history.
    ///
    /// The move list only offers valid indices; anything else is logged and
    /// ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) {
        if move_index >= self.history.len() {
            warn!(
                move_index,
                history_len = self.history.len(),
                "Ignoring jump outside history"
            );
            return;
        }
        self.current_move = move_index;
        info!(move_index, "Jumped to move");
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        info!(sort_order = %self.sort_order, "Sort order toggled");
    }

    /// Label of the sort control: names the order it switches to.
    pub fn sort_toggle_label(&self) -> &'static str {
        match self.sort_order {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
    }

    /// Rows of the move list in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut items: Vec<MoveListItem> = self
            .history
            .iter()
            .enumerate()
            .map(|(move_number, entry)| {
                let is_current = move_number == self.current_move;
                MoveListItem {
                    move_number,
                    label: self.move_label(move_number, entry, is_current),
                    is_current,
                }
            })
            .collect();

        if self.sort_order == SortOrder::Descending {
            items.reverse();
        }
        items
    }

    fn move_label(&self, move_number: usize, entry: &HistoryEntry, is_current: bool) -> String {
        if move_number == 0 {
            return if self.current_move == 0 {
                "You are at game start".to_string()
            } else {
                "Go to game start".to_string()
            };
        }

        // The mark shown is the one placed at this move, i.e. the mover
        // before the index advanced.
        let placed = Mark::to_move_after(move_number).opponent();
        let pos = entry.position().unwrap_or(Position::TopLeft);
        let prefix = if is_current { "You are at" } else { "Go to" };
        format!(
            "{prefix} move #{move_number} ({placed} at {}, {})",
            pos.row(),
            pos.column()
        )
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
