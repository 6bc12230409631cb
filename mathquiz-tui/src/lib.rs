//! mathquiz-tui library
//!
//! Terminal front end for the Mathquiz game. Exported as a library so the
//! key bindings and rendering can be tested without a real terminal.

pub mod app;
pub mod cli;
pub mod error;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use error::{TuiError, Result};
pub use app::{map_key, Input};
