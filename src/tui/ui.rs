//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, InputMode};
use noughts_rules::{Cell, Marker, Position, Seat};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen and returns the area of each cell.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);
    let cells = draw_board(frame, chunks[2], app);

    let status = match app.mode() {
        InputMode::Naming { buffer, .. } => format!("{} {}_", app.status_message(), buffer),
        _ => app.status_message().to_string(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("click/1-9/arrows+enter: move  r: new round  s: reset scores  n: rename  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    cells
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let mut spans = Vec::new();
    for seat in Seat::BOTH {
        let player = session.player(seat);
        let mut style = marker_style(player.marker());
        if seat == session.current_seat() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if seat == Seat::Two {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{} [{}]: {}", player.name(), player.marker(), player.score()),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let cells = cell_areas(board_area);

    let rule = Style::default().fg(Color::DarkGray);
    for row in 0..2u16 {
        let y = board_area.y + (row + 1) * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(board_area.x, y, board_area.width, 1).intersection(area);
        frame.render_widget(Paragraph::new("─".repeat(board_area.width as usize)).style(rule), line);
    }
    for col in 0..2u16 {
        let x = board_area.x + (col + 1) * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = board_area.y + row * (CELL_HEIGHT + 1);
            let bar = Rect::new(x, y, 1, CELL_HEIGHT).intersection(area);
            frame.render_widget(Paragraph::new("│\n│\n│").style(rule), bar);
        }
    }

    for (pos, rect) in Position::ALL.iter().zip(cells.iter()) {
        draw_cell(frame, rect.intersection(area), app, *pos);
    }

    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let session = app.session();
    let cell = session.board().get(pos.to_index()).unwrap_or(Cell::Empty);

    let (symbol, mut style) = match cell {
        Cell::Empty => (String::new(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(marker) => (marker.symbol().to_string(), marker_style(marker)),
    };

    if session
        .winning_line()
        .is_some_and(|line| line.contains(pos.to_index()))
    {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style)), Line::from("")];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn marker_style(marker: Marker) -> Style {
    let color = match marker {
        Marker::X => Color::Blue,
        Marker::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Splits a board area into 9 cells separated by one-character rules.
fn cell_areas(board: Rect) -> [Rect; 9] {
    let mut cells = [Rect::default(); 9];
    for (i, cell) in cells.iter_mut().enumerate() {
        let (row, col) = ((i / 3) as u16, (i % 3) as u16);
        *cell = Rect::new(
            board.x + col * (CELL_WIDTH + 1),
            board.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        );
    }
    cells
}

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
