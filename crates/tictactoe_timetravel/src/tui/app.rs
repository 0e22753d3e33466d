//! Application state and input handling.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position as ScreenPosition, Rect};
use ratatui::widgets::ListState;
use tictactoe_rules::Position;
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};
use crate::{Action, GameController};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    MoveList,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// Clickable regions recorded during the last draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hitboxes {
    cells: Vec<(Rect, Position)>,
    sort_toggle: Option<Rect>,
    moves: Vec<(Rect, usize)>,
}

impl Hitboxes {
    /// Records the area of a board cell.
    pub fn add_cell(&mut self, area: Rect, position: Position) {
        self.cells.push((area, position));
    }

    /// Records the area of the sort control.
    pub fn set_sort_toggle(&mut self, area: Rect) {
        self.sort_toggle = Some(area);
    }

    /// Records the area of a move-list row and the history index it jumps to.
    pub fn add_move(&mut self, area: Rect, move_number: usize) {
        self.moves.push((area, move_number));
    }

    /// Area of the cell at `position`, if drawn.
    pub fn cell_area(&self, position: Position) -> Option<Rect> {
        self.cells
            .iter()
            .find(|(_, pos)| *pos == position)
            .map(|(area, _)| *area)
    }

    /// Area of the sort control, if drawn.
    pub fn sort_toggle_area(&self) -> Option<Rect> {
        self.sort_toggle
    }

    /// Area of the row jumping to `move_number`, if visible.
    pub fn move_area(&self, move_number: usize) -> Option<Rect> {
        self.moves
            .iter()
            .find(|(_, m)| *m == move_number)
            .map(|(area, _)| *area)
    }

    /// Action under the terminal cell at (`column`, `row`).
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let point = ScreenPosition::new(column, row);
        if let Some((_, pos)) = self.cells.iter().find(|(area, _)| area.contains(point)) {
            return Some(Action::ClickCell(*pos));
        }
        if self.sort_toggle.is_some_and(|area| area.contains(point)) {
            return Some(Action::ToggleSort);
        }
        self.moves
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, m)| Action::JumpTo(*m))
    }
}

/// Main application state.
///
/// Game state lives entirely in the [`GameController`]; the cursor, focus
/// and list selection here are presentation only.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    cursor: Position,
    focus: Focus,
    list_state: ListState,
    hitboxes: Hitboxes,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `controller`.
    pub fn new(controller: GameController) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            controller,
            cursor: Position::Center,
            focus: Focus::default(),
            list_state,
            hitboxes: Hitboxes::default(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list selection and scroll state.
    pub fn list_state(&self) -> &ListState {
        &self.list_state
    }

    /// Mutable move-list state; rendering updates its scroll offset.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Clickable regions from the last draw.
    pub fn hitboxes(&self) -> &Hitboxes {
        &self.hitboxes
    }

    /// Stores the clickable regions produced by the last draw.
    pub fn set_hitboxes(&mut self, hitboxes: Hitboxes) {
        self.hitboxes = hitboxes;
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                debug!("Quit requested with Ctrl+C");
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.dispatch(Action::ToggleSort),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.dispatch(Action::ClickCell(pos));
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::MoveList => self.handle_list_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::ClickCell(self.cursor)),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let count = self.controller.history().len();
        match code {
            KeyCode::Up => {
                let i = match self.list_state.selected() {
                    Some(i) if i > 0 => i - 1,
                    _ => count - 1,
                };
                self.list_state.select(Some(i));
            }
            KeyCode::Down => {
                let i = match self.list_state.selected() {
                    Some(i) => (i + 1) % count,
                    None => 0,
                };
                self.list_state.select(Some(i));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let items = self.controller.move_list();
                let idx = self.list_state.selected().unwrap_or(0).min(items.len() - 1);
                self.dispatch(items[idx].activate());
            }
            _ => {}
        }
    }

    /// Handles a mouse event; only left-button presses activate anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(action) = self.hitboxes.action_at(mouse.column, mouse.row) else {
            return;
        };

        match action {
            Action::ClickCell(pos) => {
                self.cursor = pos;
                self.focus = Focus::Board;
            }
            Action::JumpTo(move_number) => {
                self.focus = Focus::MoveList;
                if let Some(idx) = self
                    .controller
                    .move_list()
                    .iter()
                    .position(|item| *item.move_number() == move_number)
                {
                    self.list_state.select(Some(idx));
                }
            }
            Action::ToggleSort => {}
        }
        self.dispatch(action);
    }

    /// Forwards an action to the controller and keeps the list selection
    /// on the same history entry.
    fn dispatch(&mut self, action: Action) {
        let selected_move = self.selected_move();
        self.controller.dispatch(action);

        let items = self.controller.move_list();
        let idx = selected_move
            .and_then(|m| items.iter().position(|item| *item.move_number() == m))
            .unwrap_or(0);
        self.list_state.select(Some(idx));
    }

    fn selected_move(&self) -> Option<usize> {
        let idx = self.list_state.selected()?;
        self.controller
            .move_list()
            .get(idx)
            .map(|item| *item.move_number())
    }
}
