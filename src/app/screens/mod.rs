//! TUI screen components
//!
//! Contains individual screen implementations for each route.

pub mod quiz;
pub mod splash;
pub mod stats;

pub use quiz::QuizScreen;
pub use splash::SplashScreen;
pub use stats::{parse_score_param, StatsScreen};
