//! Single-threaded update loop
//!
//! A [`Session`] owns the game, the question service and the round clock.
//! Front ends feed it player actions and wall-clock time; it runs every
//! transition to completion before looking at the next message.

use std::time::{Duration, Instant};

use super::clock::RoundClock;
use super::questions::QuestionService;
use crate::config::Config;
use crate::error::Result;
use crate::game::{Action, AppState, Game, Rules};

pub struct Session {
    game: Game,
    questions: QuestionService,
    clock: RoundClock,
}

impl Session {
    pub fn new(rules: Rules, seed: Option<u64>) -> Result<Self> {
        Ok(Self {
            game: Game::new(rules),
            questions: QuestionService::new(seed)?,
            clock: RoundClock::every_second(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.rules(), config.questions.seed)
    }

    pub fn state(&self) -> &AppState {
        self.game.state()
    }

    pub fn rules(&self) -> &Rules {
        self.game.rules()
    }

    /// Apply one action and start any work it asks for
    pub fn dispatch(&mut self, action: Action) {
        let starting = matches!(action, Action::StartGame(_));

        if let Some(command) = self.game.update(action) {
            self.questions.request(command);
        }

        if starting {
            self.clock.start(Instant::now());
        } else if self.game.state().in_game().is_none() {
            self.clock.stop();
        }
    }

    /// Apply every question delivered so far; returns how many arrived
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(action) = self.questions.try_recv() {
            self.dispatch(action);
            delivered += 1;
        }
        delivered
    }

    /// Wait up to `timeout` for one question delivery and apply it
    pub fn wait_for_question(&mut self, timeout: Duration) -> bool {
        match self.questions.recv_timeout(timeout) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Emit the ticks due at `now`; returns how many were applied
    ///
    /// Stops early once the round is over.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = self.clock.poll(now);
        let mut applied = 0;
        for _ in 0..due {
            if self.game.state().in_game().is_none() {
                break;
            }
            self.dispatch(Action::Tick);
            applied += 1;
        }
        applied
    }

    /// How long the input loop may sleep before the next tick is due
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.until_next(now)
    }
}
