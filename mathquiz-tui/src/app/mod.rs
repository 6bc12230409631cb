//! Application glue between the terminal and the game core
//!
//! - Event: what the terminal reports
//! - Keymap: which key means which game action

pub mod event;
pub mod keymap;

pub use event::{EventHandler, TuiEvent};
pub use keymap::{map_key, Input};
