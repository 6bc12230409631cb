//! Raw mode and the alternate screen for the length of a game
//!
//! The same teardown runs on normal exit and from the panic hook, so a crash
//! mid-round never leaves the player's shell without echo.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode on the alternate screen
///
/// Raw mode is undone again if the screen switch fails.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    leave(terminal.backend_mut())?;
    Ok(())
}

/// Restore the terminal before the previous hook prints the panic
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        let _ = leave(&mut io::stdout());
        previous(info);
    }));
}

fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}
