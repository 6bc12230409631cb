//! Key bindings
//!
//! Turns key presses into game actions based on the screen being shown.
//! This is the only place that knows which key does what.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libmathquiz::game::{Action, AppState, InGameState, Rules};
use libmathquiz::question::Mode;

/// Longest answer the box accepts
pub const MAX_ANSWER_LEN: usize = 9;

/// What a key press means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Feed this action to the game
    Game(Action),
    /// Leave the program
    Quit,
    /// Key has no binding here
    Ignore,
}

/// Map a key press to an input for the current screen
pub fn map_key(state: &AppState, rules: &Rules, key: KeyEvent) -> Input {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Input::Quit,
            _ => Input::Ignore,
        };
    }

    match state {
        AppState::Welcome => welcome_key(key.code),
        AppState::InGame(game) => in_game_key(game, rules, key.code),
        AppState::GameOver(_) => game_over_key(key.code),
    }
}

/// Mode chosen by a number key, in welcome-screen order
pub fn mode_for_digit(c: char) -> Option<Mode> {
    let index = c.to_digit(10)?.checked_sub(1)?;
    Mode::ALL.get(index as usize).copied()
}

/// Mode chosen by its letter on the welcome screen
fn mode_for_letter(c: char) -> Option<Mode> {
    match c.to_ascii_lowercase() {
        'a' => Some(Mode::Additions),
        's' => Some(Mode::Subtractions),
        'm' => Some(Mode::Multiplications),
        'd' => Some(Mode::Divisions),
        'x' => Some(Mode::Mixed),
        _ => None,
    }
}

fn welcome_key(code: KeyCode) -> Input {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char(c) => mode_for_digit(c)
            .or_else(|| mode_for_letter(c))
            .map_or(Input::Ignore, |mode| Input::Game(Action::StartGame(mode))),
        _ => Input::Ignore,
    }
}

fn in_game_key(game: &InGameState, rules: &Rules, code: KeyCode) -> Input {
    match code {
        KeyCode::Esc => Input::Quit,
        KeyCode::Enter if game.can_submit(rules.feedback) => Input::Game(Action::Submit),
        KeyCode::Backspace => {
            let mut text = game.text.clone();
            text.pop();
            Input::Game(Action::ChangeText(text))
        }
        KeyCode::Char(c) if !c.is_control() && game.text.chars().count() < MAX_ANSWER_LEN => {
            let mut text = game.text.clone();
            text.push(c);
            Input::Game(Action::ChangeText(text))
        }
        _ => Input::Ignore,
    }
}

fn game_over_key(code: KeyCode) -> Input {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('m') => Input::Game(Action::MainMenu),
        KeyCode::Char(c) => mode_for_digit(c)
            .map_or(Input::Ignore, |mode| Input::Game(Action::StartGame(mode))),
        _ => Input::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_for_digit() {
        assert_eq!(mode_for_digit('1'), Some(Mode::Additions));
        assert_eq!(mode_for_digit('2'), Some(Mode::Subtractions));
        assert_eq!(mode_for_digit('5'), Some(Mode::Mixed));
        assert_eq!(mode_for_digit('0'), None);
        assert_eq!(mode_for_digit('6'), None);
        assert_eq!(mode_for_digit('z'), None);
    }
}
