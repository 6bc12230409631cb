//! Pure reducer function for state transitions
//!
//! `(State, Action) -> (State, Option<Command>)`
//!
//! The reducer performs no I/O and draws no random numbers. When it needs a
//! new question it returns a [`Command`]; the driver runs it and feeds the
//! result back as [`Action::NewQuestion`].
//!
//! Every combination of state and action is defined: anything not listed in
//! the match below leaves the state untouched.

use super::actions::{Action, Command, Ticket};
use super::state::{AppState, Feedback, FeedbackPolicy, InGameState, Outcome, Rules, Score};
use crate::question::{parse_answer, Question};

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub command: Option<Command>,
}

impl Transition {
    fn to(state: AppState) -> Self {
        Self { state, command: None }
    }

    fn with_command(state: AppState, command: Command) -> Self {
        Self {
            state,
            command: Some(command),
        }
    }
}

/// Pure reducer function
///
/// `ticket` is the ticket to attach if this transition requests a question;
/// the caller advances its counter only when a command comes back.
pub fn reduce(state: AppState, action: Action, rules: &Rules, ticket: Ticket) -> Transition {
    match (state, action) {
        // A round can be (re)started from any screen
        (_, Action::StartGame(mode)) => {
            let game = InGameState {
                pending: Some(ticket),
                ..InGameState::new(mode, rules.round_secs)
            };
            tracing::info!(%mode, secs = rules.round_secs, "round started");
            Transition::with_command(AppState::InGame(game), Command::GenerateQuestion { mode, ticket })
        }

        (AppState::GameOver(_), Action::MainMenu) => Transition::to(AppState::Welcome),

        (AppState::InGame(game), Action::Tick) => tick(game),

        (AppState::InGame(game), Action::ChangeText(text)) => change_text(game, text, rules.feedback),

        (AppState::InGame(game), Action::Submit) => submit(game, rules.feedback, ticket),

        (AppState::InGame(game), Action::NewQuestion { ticket: delivered, question }) => {
            receive_question(game, delivered, question)
        }

        (state, _) => Transition::to(state),
    }
}

/// Take a point away for a wrong answer, never going below zero
pub fn reduce_score(score: Score) -> Score {
    score.saturating_sub(1)
}

fn tick(game: InGameState) -> Transition {
    if game.remaining_secs == 0 {
        tracing::info!(mode = %game.mode, score = game.score, "round over");
        return Transition::to(AppState::GameOver(game.score));
    }

    Transition::to(AppState::InGame(InGameState {
        remaining_secs: game.remaining_secs - 1,
        ..game
    }))
}

fn change_text(game: InGameState, text: String, policy: FeedbackPolicy) -> Transition {
    // Clearing an already empty box touches nothing
    if game.text.is_empty() && text.is_empty() {
        return Transition::to(AppState::InGame(game));
    }

    let feedback = match policy {
        // An emptied box keeps its previous hint instead of flashing an error
        FeedbackPolicy::Feedback if text.is_empty() => game.feedback,
        FeedbackPolicy::Feedback => match parse_answer(&text) {
            Ok(_) => Feedback::Ready,
            Err(_) => Feedback::SyntaxError,
        },
        FeedbackPolicy::Silent => game.feedback,
    };

    Transition::to(AppState::InGame(InGameState {
        text,
        feedback,
        ..game
    }))
}

fn submit(game: InGameState, policy: FeedbackPolicy, ticket: Ticket) -> Transition {
    let answer = match parse_answer(&game.text) {
        Ok(answer) => answer,
        Err(err) => {
            tracing::debug!(error = %err, "submission rejected");
            return match policy {
                FeedbackPolicy::Feedback => Transition::to(AppState::InGame(InGameState {
                    feedback: Feedback::SyntaxError,
                    ..game
                })),
                FeedbackPolicy::Silent => Transition::to(AppState::InGame(game)),
            };
        }
    };

    let correct = game.question.is_answered_by(answer);
    let (score, feedback) = if correct {
        (game.score.saturating_add(1), Feedback::Correct)
    } else {
        (reduce_score(game.score), Feedback::Incorrect)
    };
    tracing::debug!(question = %game.question, answer, correct, score, "answer submitted");

    let mode = game.mode;
    let game = InGameState {
        text: String::new(),
        score,
        feedback,
        pending: Some(ticket),
        last_outcome: Some(Outcome {
            question: game.question,
            answer,
            correct,
        }),
        ..game
    };
    Transition::with_command(AppState::InGame(game), Command::GenerateQuestion { mode, ticket })
}

fn receive_question(game: InGameState, delivered: Ticket, question: Question) -> Transition {
    if game.pending != Some(delivered) {
        tracing::debug!(
            delivered = delivered.seq(),
            pending = game.pending.map(Ticket::seq),
            "discarding stale question"
        );
        return Transition::to(AppState::InGame(game));
    }

    Transition::to(AppState::InGame(InGameState {
        question,
        text: String::new(),
        feedback: Feedback::SyntaxError,
        pending: None,
        ..game
    }))
}
