//! UI rendering using ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus, Hitboxes};
use tictactoe_rules::{GameStatus, Position};

/// Draws the whole screen and stores the clickable regions on `app`.
///
/// The move list renders into the app's own [`ListState`](ratatui::widgets::ListState),
/// so its scroll offset carries over to the next frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let mut hitboxes = Hitboxes::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_game(frame, body[0], app, &mut hitboxes);
    draw_moves(frame, body[1], app, &mut hitboxes);

    let help = Paragraph::new(
        "1-9/Enter: Play | Arrows: Move | Tab: Switch pane | S: Sort | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    app.set_hitboxes(hitboxes);
}

/// Status line over the board grid.
fn draw_game(frame: &mut Frame, area: Rect, app: &App, hitboxes: &mut Hitboxes) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let controller = app.controller();
    let status = controller.status();
    let status_style = match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
    };
    let status_line = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_line, chunks[0]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let areas = controller.board_view().render(frame, chunks[1], cursor);
    for (area, pos) in areas.into_iter().zip(Position::ALL) {
        hitboxes.add_cell(area, pos);
    }
}

/// Sort control over the move list.
fn draw_moves(frame: &mut Frame, area: Rect, app: &mut App, hitboxes: &mut Hitboxes) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let toggle = Paragraph::new(format!("[ {} ]", app.controller().sort_toggle_label()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, chunks[0]);
    hitboxes.set_sort_toggle(chunks[0]);

    let moves = app.controller().move_list();
    let items: Vec<ListItem> = moves
        .iter()
        .map(|item| {
            let style = if *item.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(item.label().as_str()).style(style)
        })
        .collect();

    let (border_style, highlight_style) = if app.focus() == Focus::MoveList {
        (
            Style::default().fg(Color::Yellow),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default(), Style::default())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Moves");
    let inner = block.inner(chunks[1]);
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[1], app.list_state_mut());

    // One terminal row per item, starting at the scroll offset.
    for (row, item) in moves
        .iter()
        .skip(app.list_state().offset())
        .take(inner.height as usize)
        .enumerate()
    {
        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        hitboxes.add_move(row_area, *item.move_number());
    }
}
