//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and navigation handling.

pub mod app;
pub mod flow;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use flow::QuizFlow;
pub use screens::{QuizScreen, SplashScreen, StatsScreen};
pub use state::{NavOptions, NavigationAction, Navigator, Route, RouteKind};
pub use tui::Tui;

/// Events delivered to the UI loop from background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The splash screen delay has run out
    SplashElapsed,
}
