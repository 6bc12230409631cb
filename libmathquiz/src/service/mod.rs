//! Runtime pieces around the pure game core
//!
//! - `questions`: runs question requests on a tokio runtime and hands the
//!   results back over a channel
//! - `clock`: turns wall-clock time into one-second ticks
//! - `session`: the single-threaded update loop tying both to the game

pub mod clock;
pub mod questions;
pub mod session;

pub use clock::RoundClock;
pub use questions::QuestionService;
pub use session::Session;
