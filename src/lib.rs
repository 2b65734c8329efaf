//! launch-confirm library
//!
//! Interactive confirmation of a launch configuration: a summary table the
//! user may step into to edit rows, followed by a Yes/No answer.

pub mod cli;
pub mod components;
pub mod error;
pub mod question;
pub mod runtime;
pub mod scrolling;
pub mod summary;

// Re-export main types for convenience
pub use error::QuestionError;
pub use question::{Confirmation, Question, QuestionInput, Response};
pub use summary::{LaunchSummary, SummaryRow};
