//! Asynchronous question generation
//!
//! Bridges question requests onto a tokio runtime and back into the
//! synchronous update loop:
//!
//! - `request` spawns a task that samples the mode's distribution
//! - the task sends `Action::NewQuestion` on a crossbeam channel
//! - the update loop drains the channel with `try_recv`/`recv_timeout`
//!
//! # Example
//!
//! ```no_run
//! use libmathquiz::game::{Command, Ticket};
//! use libmathquiz::question::Mode;
//! use libmathquiz::service::QuestionService;
//! use std::time::Duration;
//!
//! # fn example() -> libmathquiz::Result<()> {
//! let questions = QuestionService::new(Some(7))?;
//! questions.request(Command::GenerateQuestion {
//!     mode: Mode::Mixed,
//!     ticket: Ticket::default(),
//! });
//!
//! if let Some(action) = questions.recv_timeout(Duration::from_secs(1)) {
//!     println!("{:?}", action);
//! }
//! # Ok(())
//! # }
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Result;
use crate::game::{Action, Command};

/// Runs question requests off the update loop
pub struct QuestionService {
    runtime: tokio::runtime::Runtime,
    rng: Arc<Mutex<StdRng>>,
    tx: Sender<Action>,
    rx: Receiver<Action>,
}

impl QuestionService {
    /// Create a service drawing from a seeded generator, or from OS entropy
    /// when `seed` is `None`
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created
    pub fn new(seed: Option<u64>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("mathquiz-questions")
            .build()?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (tx, rx) = unbounded();

        Ok(Self {
            runtime,
            rng: Arc::new(Mutex::new(rng)),
            tx,
            rx,
        })
    }

    /// Run a command emitted by the reducer
    ///
    /// Returns immediately; the result shows up on the channel later.
    pub fn request(&self, command: Command) {
        match command {
            Command::GenerateQuestion { mode, ticket } => {
                let rng = Arc::clone(&self.rng);
                let tx = self.tx.clone();

                self.runtime.spawn(async move {
                    let question = {
                        let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                        mode.sample(&mut *rng)
                    };
                    tracing::debug!(%mode, ticket = ticket.seq(), %question, "question generated");

                    if tx.send(Action::NewQuestion { ticket, question }).is_err() {
                        tracing::debug!("question receiver dropped");
                    }
                });
            }
        }
    }

    /// Delivered questions, for callers that want to `select!` on them
    pub fn receiver(&self) -> &Receiver<Action> {
        &self.rx
    }

    /// Next delivered question, if one is waiting
    pub fn try_recv(&self) -> Option<Action> {
        self.rx.try_recv().ok()
    }

    /// Block up to `timeout` for the next delivered question
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Action> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Ticket;
    use crate::question::{Mode, Operation};

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_request_delivers_question_with_ticket() {
        let service = QuestionService::new(Some(1)).unwrap();
        service.request(Command::GenerateQuestion {
            mode: Mode::Subtractions,
            ticket: Ticket::new(3),
        });

        match service.recv_timeout(WAIT) {
            Some(Action::NewQuestion { ticket, question }) => {
                assert_eq!(ticket, Ticket::new(3));
                assert_eq!(question.operation, Operation::Sub);
                assert!(question.is_consistent());
            }
            other => panic!("expected a question, got {:?}", other),
        }
    }

    #[test]
    fn test_seeded_services_agree() {
        let a = QuestionService::new(Some(99)).unwrap();
        let b = QuestionService::new(Some(99)).unwrap();

        for seq in 0..5 {
            let command = Command::GenerateQuestion {
                mode: Mode::Mixed,
                ticket: Ticket::new(seq),
            };
            a.request(command);
            b.request(command);
            assert_eq!(a.recv_timeout(WAIT), b.recv_timeout(WAIT));
        }
    }

    #[test]
    fn test_nothing_waiting_initially() {
        let service = QuestionService::new(None).unwrap();
        assert!(service.try_recv().is_none());
        assert!(service.receiver().is_empty());
    }
}
