//! UI rendering
//!
//! Pure rendering functions that draw the current game state. Nothing here
//! changes state; key presses are handled in `app::keymap`.

mod round;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use libmathquiz::game::{verdict, AppState, Rules, Score};
use libmathquiz::question::Mode;

pub use round::{feedback_hint, outcome_line};

/// Everything the renderer reads
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub state: &'a AppState,
    pub rules: &'a Rules,
    pub colors: bool,
}

/// Draw the screen for the current state
pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();

    match view.state {
        AppState::Welcome => render_welcome(frame, area, view),
        AppState::InGame(game) => round::render_round(frame, area, game, view),
        AppState::GameOver(score) => render_game_over(frame, area, *score, view),
    }
}

/// Foreground color, or plain text when colors are off
pub(crate) fn fg(view: &View, color: Color) -> Style {
    if view.colors {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn render_welcome(frame: &mut Frame, area: Rect, view: &View) {
    let popup_area = centered_rect(60, 70, area);

    let mut lines = vec![
        Line::from(Span::styled("Welcome to Mathquiz!", bold().patch(fg(view, Color::Cyan)))),
        Line::from(""),
        Line::from(format!("You have {} seconds per round.", view.rules.round_secs)),
        Line::from(""),
        Line::from("Pick a game:"),
        Line::from(""),
    ];
    lines.extend(Mode::ALL.iter().enumerate().map(|(i, mode)| {
        Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), fg(view, Color::Yellow)),
            Span::raw(mode.label()),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("q: Quit", fg(view, Color::Gray))));

    let welcome = Paragraph::new(lines)
        .block(Block::default()
            .title(" Mathquiz ")
            .borders(Borders::ALL)
            .border_style(fg(view, Color::Cyan)))
        .alignment(Alignment::Center);

    frame.render_widget(welcome, popup_area);
}

fn render_game_over(frame: &mut Frame, area: Rect, score: Score, view: &View) {
    let popup_area = centered_rect(60, 50, area);

    let lines = vec![
        Line::from(Span::styled("Time's up!", bold().patch(fg(view, Color::Yellow)))),
        Line::from(""),
        Line::from(Span::styled(format!("Score: {}", score), bold())),
        Line::from(""),
        Line::from(verdict(score)),
        Line::from(""),
        Line::from(Span::styled(
            "1-5: Play again | m: Menu | q: Quit",
            fg(view, Color::Gray),
        )),
    ];

    let game_over = Paragraph::new(lines)
        .block(Block::default()
            .title(" Game Over ")
            .borders(Borders::ALL)
            .border_style(fg(view, Color::Yellow)))
        .alignment(Alignment::Center);

    frame.render_widget(game_over, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
