//! Stateless board view: click routing, status line and the 3x3 grid.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use tictactoe_rules::{Board, GameStatus, Mark, Position, WinningLine};
use tracing::{debug, instrument};

use crate::CellView;

/// Width of one rendered cell, borders included.
const CELL_WIDTH: u16 = 7;
/// Height of one rendered cell, borders included.
const CELL_HEIGHT: u16 = 3;

/// Borrowed view over the displayed board.
///
/// Holds no game state of its own; the controller builds a fresh view for
/// every click and every frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    next: Mark,
    highlight: Option<WinningLine>,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` with `next` to move.
    pub fn new(board: &'a Board, next: Mark, highlight: Option<WinningLine>) -> Self {
        Self {
            board,
            next,
            highlight,
        }
    }

    /// Handles a click on `position`.
    ///
    /// Clicks on an occupied square, or on any square once the board has a
    /// winner, are dropped. Otherwise `on_play` receives the next board and
    /// the clicked position.
    #[instrument(skip(self, on_play), fields(next = %self.next))]
    pub fn click<F>(&self, position: Position, on_play: F)
    where
        F: FnOnce(Board, Position),
    {
        if !self.board.is_empty(position) {
            debug!(%position, "Ignoring click on occupied square");
            return;
        }
        if self.status().winner().is_some() {
            debug!(%position, "Ignoring click after the game was won");
            return;
        }

        on_play(self.board.with_mark(position, self.next), position);
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.board, self.next)
    }

    /// The nine cells in row-major order.
    pub fn cells(&self) -> [CellView; 9] {
        Position::ALL.map(|pos| {
            let highlighted = self.highlight.is_some_and(|line| line.contains(pos));
            CellView::new(pos, self.board.get(pos), highlighted)
        })
    }

    /// Draws the grid centred in `area` and returns the area of each cell,
    /// indexed by board position.
    pub fn render(&self, frame: &mut Frame, area: Rect, cursor: Option<Position>) -> [Rect; 9] {
        let grid = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CELL_HEIGHT); 3])
            .split(grid);

        let mut areas = [Rect::default(); 9];
        let cells = self.cells();
        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CELL_WIDTH); 3])
                .split(*row_area);

            for (col, cell_area) in cols.iter().enumerate() {
                let cell = &cells[row * 3 + col];
                cell.render(frame, *cell_area, cursor == Some(*cell.position()));
                areas[row * 3 + col] = *cell_area;
            }
        }
        areas
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_rules::check_winner;

    #[test]
    fn test_click_empty_square_plays_mover() {
        let board = Board::new();
        let view = BoardView::new(&board, Mark::X, None);
        let mut played = None;
        view.click(Position::Center, |next, pos| played = Some((next, pos)));

        let (next, pos) = played.expect("move should be played");
        assert_eq!(pos, Position::Center);
        assert_eq!(next.get(Position::Center).mark(), Some(Mark::X));
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_click_occupied_square_is_ignored() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        let view = BoardView::new(&board, Mark::O, None);
        let mut called = false;
        view.click(Position::Center, |_, _| called = true);
        assert!(!called);
    }

    #[test]
    fn test_click_after_win_is_ignored() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::X)
            .with_mark(Position::TopRight, Mark::X);
        let win = check_winner(&board);
        let view = BoardView::new(&board, Mark::O, win);
        let mut called = false;
        view.click(Position::Center, |_, _| called = true);
        assert!(!called);
        assert_eq!(view.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_highlight_marks_winning_cells() {
        let board = Board::new()
            .with_mark(Position::TopRight, Mark::O)
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomLeft, Mark::O);
        let view = BoardView::new(&board, Mark::X, check_winner(&board));
        let highlighted: Vec<Position> = view
            .cells()
            .iter()
            .filter(|c| *c.highlighted())
            .map(|c| *c.position())
            .collect();
        assert_eq!(
            highlighted,
            vec![Position::TopRight, Position::Center, Position::BottomLeft]
        );
    }

    #[test]
    fn test_center_rect_fits_inside() {
        let area = Rect::new(0, 0, 40, 20);
        let inner = center_rect(area, 21, 9);
        assert_eq!(inner, Rect::new(9, 5, 21, 9));
    }

    #[test]
    fn test_grid_cells_use_cell_size() {
        let board = Board::new();
        let view = BoardView::new(&board, Mark::X, None);
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(40, 20)).expect("terminal");
        let mut areas = [Rect::default(); 9];
        terminal
            .draw(|f| areas = view.render(f, Rect::new(0, 0, 40, 20), None))
            .expect("draw");

        let grid = center_rect(Rect::new(0, 0, 40, 20), CELL_WIDTH * 3, CELL_HEIGHT * 3);
        assert_eq!(areas[0], Rect::new(grid.x, grid.y, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(
            areas[8],
            Rect::new(
                grid.x + 2 * CELL_WIDTH,
                grid.y + 2 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT
            )
        );
    }
}
