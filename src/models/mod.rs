//! Data models module
//!
//! Contains the question data and the quiz state machine.

pub mod question;
pub mod quiz;

// Re-export commonly used types
pub use question::{Question, QuestionBank, OPTIONS_PER_QUESTION};
pub use quiz::{ConfirmOutcome, QuizPhase, QuizState};
