//! Error handling module for launch-confirm
//!
//! The two ways a question can end without an answer.

use thiserror::Error;

/// Error captured while a question is being asked
#[derive(Debug, Error)]
pub enum QuestionError {
    /// The user pressed the interrupt key
    #[error("user exited the question")]
    Cancelled,
    /// Error reported by the terminal host loop
    #[error("terminal error: {0}")]
    Terminal(String),
    /// IO errors from the terminal backend
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuestionError {
    /// Whether the question ended because the user backed out
    pub fn is_cancelled(&self) -> bool {
        matches!(self, QuestionError::Cancelled)
    }
}

/// Helper function to create terminal errors
pub fn terminal_error(msg: impl Into<String>) -> QuestionError {
    QuestionError::Terminal(msg.into())
}
