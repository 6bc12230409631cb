//! Mathquiz - a timed arithmetic quiz for kids
//!
//! This library holds everything except drawing: the round state machine,
//! the question generator and the update loop that connects them to a
//! one-second clock.

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod question;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{QuizError, Result};
pub use game::{Action, AppState, Command, Feedback, FeedbackPolicy, Game, InGameState, Rules};
pub use question::{Mode, Operation, Question};
pub use service::Session;
