//! Game module
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> (State, Command)
//! - Machine: owns the state and hands out question tickets

pub mod actions;
pub mod machine;
pub mod reducer;
pub mod state;
pub mod verdict;

pub use actions::{Action, Command, Ticket};
pub use machine::Game;
pub use reducer::{reduce, reduce_score, Transition};
pub use state::{AppState, Feedback, FeedbackPolicy, InGameState, Outcome, Rules, Score, ROUND_SECS};
pub use verdict::verdict;
