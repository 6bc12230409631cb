//! Error types for Mathquiz

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl QuizError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuizError::Config(_) | QuizError::Runtime(_) | QuizError::Logging(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Why an answer box could not be read as a number.
///
/// Never surfaces as a failure to the player; the reducer turns it into
/// feedback or ignores the submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Answer is empty")]
    Empty,

    #[error("Not a whole number: '{0}'")]
    Malformed(String),
}
