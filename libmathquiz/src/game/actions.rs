//! Actions and commands for the reducer pattern
//!
//! Actions are everything that can happen to the game: player input, the
//! one-second clock and question deliveries. Commands are the only side
//! effect the reducer can ask for.

use crate::question::{Mode, Question};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start (or restart) a round in the given mode
    StartGame(Mode),

    /// Leave the game-over screen for the welcome screen
    MainMenu,

    /// One second of round time has passed
    Tick,

    /// The answer box now holds this text
    ChangeText(String),

    /// The player pressed enter on the answer box
    Submit,

    /// A requested question has been generated
    NewQuestion { ticket: Ticket, question: Question },
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Draw a question for `mode` and deliver it as `Action::NewQuestion`
    /// carrying the same `ticket`
    GenerateQuestion { mode: Mode, ticket: Ticket },
}

/// Sequence number identifying one question request
///
/// Only the most recently issued ticket is honoured, so a question that
/// arrives late can never overwrite a newer one or revive a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    pub fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn seq(self) -> u64 {
        self.0
    }
}
