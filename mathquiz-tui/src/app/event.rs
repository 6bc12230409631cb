//! Terminal event polling
//!
//! Wakes the game loop for key presses, resizes, or at least every
//! `tick_rate` so the countdown and question deliveries get drawn.

use std::time::Duration;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Events the game loop reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Key press (releases and repeats are filtered out)
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Nothing happened within the poll window
    Tick,
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait for the next event
    ///
    /// Blocks for at most the tick rate, or less when `deadline` is sooner.
    pub fn next(&self, deadline: Option<Duration>) -> std::io::Result<TuiEvent> {
        let timeout = deadline.map_or(self.tick_rate, |d| d.min(self.tick_rate));

        if event::poll(timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(TuiEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let handler = EventHandler::new(0);
        assert_eq!(handler.tick_rate(), Duration::from_millis(1));
    }
}
