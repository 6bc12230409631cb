//! Error types for mathquiz-tui
//!
//! Wraps game-core errors and terminal I/O errors so `main` has one type
//! to report.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Game core error (config, runtime, logging)
    #[error("{0}")]
    Quiz(#[from] libmathquiz::QuizError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl TuiError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Quiz(e) => e.exit_code(),
            TuiError::Terminal(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use libmathquiz::error::ConfigError;
    use libmathquiz::QuizError;

    #[test]
    fn test_exit_code_follows_core_error() {
        let err: TuiError = QuizError::Config(ConfigError::Invalid("x".to_string())).into();
        assert_eq!(err.exit_code(), 1);

        let err: TuiError = std::io::Error::new(std::io::ErrorKind::Other, "tty").into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Terminal error: tty");
    }
}
