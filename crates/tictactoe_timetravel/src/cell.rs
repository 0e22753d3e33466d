//! A single board cell.

use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_rules::{Mark, Position, Square};

use crate::Action;

/// Render data for one cell, built by [`BoardView::cells`](crate::BoardView::cells).
///
/// A cell never validates anything. Activating it just yields the click
/// action for the position it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct CellView {
    position: Position,
    square: Square,
    highlighted: bool,
}

impl CellView {
    /// Creates a cell for `position`.
    pub fn new(position: Position, square: Square, highlighted: bool) -> Self {
        Self {
            position,
            square,
            highlighted,
        }
    }

    /// Text shown inside the cell.
    pub fn symbol(&self) -> &'static str {
        match self.square {
            Square::Empty => " ",
            Square::Occupied(Mark::X) => "X",
            Square::Occupied(Mark::O) => "O",
        }
    }

    /// Action emitted when the cell is activated.
    pub fn activate(&self) -> Action {
        Action::ClickCell(self.position)
    }

    /// Draws the cell into `area`. `has_cursor` marks the keyboard cursor.
    pub fn render(&self, frame: &mut Frame, area: Rect, has_cursor: bool) {
        let mark_style = match self.square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Mark::X) => Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            Square::Occupied(Mark::O) => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        };

        let (fill, mark_style) = if self.highlighted {
            (
                Style::default().bg(Color::Yellow),
                mark_style.fg(Color::Black).bg(Color::Yellow),
            )
        } else {
            (Style::default(), mark_style)
        };

        let border_style = if has_cursor {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(self.symbol(), mark_style)))
            .alignment(Alignment::Center)
            .style(fill)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(paragraph, area);
    }
}
