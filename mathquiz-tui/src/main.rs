//! mathquiz - timed arithmetic quiz for the terminal

use std::time::Instant;

use clap::Parser;
use libmathquiz::{Config, Session};
use mathquiz_tui::{
    app::{map_key, EventHandler, Input, TuiEvent},
    cli::Args,
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, View},
};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.load_config()?;
    args.logging(&config).init()?;
    tracing::info!(
        secs = config.round.duration_secs,
        feedback = ?config.round.feedback,
        seeded = config.questions.seed.is_some(),
        "starting mathquiz"
    );

    // Build the session before touching the terminal so startup errors print normally
    let session = Session::from_config(&config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, session, &config);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, mut session: Session, config: &Config) -> Result<()> {
    let events = EventHandler::new(config.ui.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            let view = View {
                state: session.state(),
                rules: session.rules(),
                colors: config.ui.colors,
            };
            ui::render(frame, &view);
        })?;

        match events.next(session.until_next_tick(Instant::now()))? {
            TuiEvent::Key(key) => match map_key(session.state(), session.rules(), key) {
                Input::Game(action) => session.dispatch(action),
                Input::Quit => break,
                Input::Ignore => {}
            },
            TuiEvent::Resize(..) | TuiEvent::Tick => {}
        }

        session.pump();
        session.advance(Instant::now());
    }

    tracing::info!("quitting");
    Ok(())
}
