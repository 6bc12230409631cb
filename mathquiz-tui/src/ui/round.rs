//! In-game screen: countdown, question, answer box and feedback

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use libmathquiz::game::{Feedback, FeedbackPolicy, InGameState, Outcome};

use super::{fg, View};

/// Seconds left at which the countdown turns red
const HURRY_SECS: u32 = 10;

pub(super) fn render_round(frame: &mut Frame, area: Rect, game: &InGameState, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Question
            Constraint::Length(3), // Answer box
            Constraint::Length(1), // Feedback
            Constraint::Length(1), // Previous answer
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_status(frame, chunks[0], game, view);

    let question = Paragraph::new(Line::from(Span::styled(
        format!("{} = ?", game.question),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Question "));
    frame.render_widget(question, chunks[1]);

    let answer = Paragraph::new(game.text.as_str())
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Answer ")
            .border_style(fg(view, Color::Cyan)));
    frame.render_widget(answer, chunks[2]);

    // The answer box always has focus while a round runs
    let cursor_x = chunks[2].x + 1 + game.text.chars().count() as u16;
    frame.set_cursor_position((cursor_x.min(chunks[2].right().saturating_sub(2)), chunks[2].y + 1));

    if let Some((hint, color)) = feedback_hint(game, view.rules.feedback) {
        frame.render_widget(Paragraph::new(Span::styled(hint, fg(view, color))), chunks[3]);
    }

    if let Some(outcome) = &game.last_outcome {
        let color = if outcome.correct { Color::Green } else { Color::Red };
        frame.render_widget(
            Paragraph::new(Span::styled(outcome_line(outcome), fg(view, color))),
            chunks[4],
        );
    }

    let hints = Paragraph::new(Span::styled("Enter: Answer | Backspace: Delete | Esc: Quit", fg(view, Color::Gray)));
    frame.render_widget(hints, chunks[6]);
}

fn render_status(frame: &mut Frame, area: Rect, game: &InGameState, view: &View) {
    let time_color = if game.remaining_secs <= HURRY_SECS { Color::Red } else { Color::Green };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(game.mode.label()),
        Span::raw(" | Score: "),
        Span::styled(game.score.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | Time: "),
        Span::styled(format!("{}s", game.remaining_secs), fg(view, time_color)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Mathquiz "));

    frame.render_widget(status, area);
}

/// Text and color shown under the answer box, if any
///
/// The silent policy shows no feedback at all.
pub fn feedback_hint(game: &InGameState, policy: FeedbackPolicy) -> Option<(&'static str, Color)> {
    if policy == FeedbackPolicy::Silent {
        return None;
    }

    Some(match game.feedback {
        Feedback::Correct => ("Correct!", Color::Green),
        Feedback::Incorrect => ("Not quite, keep going!", Color::Red),
        Feedback::SyntaxError if game.text.is_empty() => ("Type your answer", Color::Gray),
        Feedback::SyntaxError => ("Numbers only, please", Color::Yellow),
        Feedback::Ready => ("Press Enter to answer", Color::Cyan),
    })
}

/// One-line summary of the previous answer
pub fn outcome_line(outcome: &Outcome) -> String {
    let question = outcome.question;
    if outcome.correct {
        format!("✓ {} = {}", question, question.result)
    } else {
        format!("✗ {} = {} (you said {})", question, question.result, outcome.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libmathquiz::question::{Mode, Question};

    #[test]
    fn test_outcome_line() {
        let right = Outcome {
            question: Question::addition(2, 3),
            answer: 5,
            correct: true,
        };
        assert_eq!(outcome_line(&right), "✓ 2 + 3 = 5");

        let wrong = Outcome {
            question: Question::addition(2, 3),
            answer: 9,
            correct: false,
        };
        assert_eq!(outcome_line(&wrong), "✗ 2 + 3 = 5 (you said 9)");
    }

    #[test]
    fn test_feedback_hint() {
        let mut game = InGameState::new(Mode::Additions, 60);
        assert_eq!(feedback_hint(&game, FeedbackPolicy::Feedback).unwrap().0, "Type your answer");

        game.text = "x".to_string();
        assert_eq!(feedback_hint(&game, FeedbackPolicy::Feedback).unwrap().0, "Numbers only, please");

        game.feedback = Feedback::Ready;
        assert_eq!(feedback_hint(&game, FeedbackPolicy::Feedback).unwrap().1, Color::Cyan);
        assert!(feedback_hint(&game, FeedbackPolicy::Silent).is_none());
    }
}
