//! Stateful wrapper around the reducer

use super::actions::{Action, Command, Ticket};
use super::reducer::{reduce, Transition};
use super::state::{AppState, Rules};

/// The game state machine
///
/// Holds the current [`AppState`] and the ticket counter used to match
/// question deliveries to requests. Transitions run to completion inside
/// [`Game::update`]; nothing else mutates the state.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: AppState,
    rules: Rules,
    next_ticket: Ticket,
}

impl Game {
    pub fn new(rules: Rules) -> Self {
        Self {
            state: AppState::Welcome,
            rules,
            next_ticket: Ticket::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Apply one action, returning the side effect it asks for
    pub fn update(&mut self, action: Action) -> Option<Command> {
        let from = self.state.phase();
        tracing::trace!(?action, from, "dispatch");

        let state = std::mem::take(&mut self.state);
        let Transition { state, command } = reduce(state, action, &self.rules, self.next_ticket);
        if command.is_some() {
            self.next_ticket = self.next_ticket.next();
        }

        if from != state.phase() {
            tracing::debug!(from, to = state.phase(), "screen changed");
        }
        self.state = state;
        command
    }
}
