//! Game state
//!
//! [`AppState`] is the single source of truth: exactly one of the three
//! screens is active at a time. All transitions go through the reducer
//! (see `reducer.rs`).

use serde::{Deserialize, Serialize};

use super::actions::Ticket;
use crate::question::{Mode, Question};

/// Length of a round unless configured otherwise
pub const ROUND_SECS: u32 = 60;

/// Points scored in a round
pub type Score = u32;

/// Root application state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    /// Mode selection screen
    #[default]
    Welcome,

    /// A round is running
    InGame(InGameState),

    /// Round finished with this final score
    GameOver(Score),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Short name of the active screen, used in logs
    pub fn phase(&self) -> &'static str {
        match self {
            AppState::Welcome => "welcome",
            AppState::InGame(_) => "in_game",
            AppState::GameOver(_) => "game_over",
        }
    }

    pub fn in_game(&self) -> Option<&InGameState> {
        match self {
            AppState::InGame(game) => Some(game),
            _ => None,
        }
    }

    /// Current score while playing, final score once the round is over
    pub fn score(&self) -> Option<Score> {
        match self {
            AppState::Welcome => None,
            AppState::InGame(game) => Some(game.score),
            AppState::GameOver(score) => Some(*score),
        }
    }
}

/// State of a running round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InGameState {
    pub mode: Mode,

    /// Question on screen; the default placeholder until the first one arrives
    pub question: Question,

    /// Raw contents of the answer box
    pub text: String,

    pub score: Score,

    /// Counts down to zero, one per tick
    pub remaining_secs: u32,

    pub feedback: Feedback,

    /// Ticket of the question request still in flight, if any
    pub pending: Option<Ticket>,

    /// How the last submitted answer went; survives new questions
    pub last_outcome: Option<Outcome>,
}

impl InGameState {
    /// Fresh round: no score, empty answer box, placeholder question
    pub fn new(mode: Mode, round_secs: u32) -> Self {
        Self {
            mode,
            question: Question::default(),
            text: String::new(),
            score: 0,
            remaining_secs: round_secs,
            feedback: Feedback::SyntaxError,
            pending: None,
            last_outcome: None,
        }
    }

    /// Should enter submit the answer box?
    pub fn can_submit(&self, policy: FeedbackPolicy) -> bool {
        match policy {
            FeedbackPolicy::Feedback => self.feedback == Feedback::Ready,
            FeedbackPolicy::Silent => !self.text.is_empty(),
        }
    }
}

/// Hint about the answer box, shown next to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Last submitted answer was right
    Correct,
    /// Last submitted answer was wrong
    Incorrect,
    /// Box is empty or not a whole number
    SyntaxError,
    /// Box holds a number and can be submitted
    Ready,
}

/// Record of a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub question: Question,
    pub answer: i64,
    pub correct: bool,
}

/// How malformed answers are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackPolicy {
    /// Every keystroke updates the feedback; submitting garbage shows
    /// a syntax error
    #[default]
    Feedback,
    /// Keystrokes only edit the text; submitting garbage does nothing
    Silent,
}

/// Round parameters fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub round_secs: u32,
    pub feedback: FeedbackPolicy,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            round_secs: ROUND_SECS,
            feedback: FeedbackPolicy::default(),
        }
    }
}
