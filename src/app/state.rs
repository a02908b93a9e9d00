//! Application state management
//!
//! Routes, the navigation back stack, and keyboard event mapping for the
//! TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

const SPLASH_PATH: &str = "splash";
const QUIZ_PATH: &str = "quiz";
const STATS_PREFIX: &str = "Finalstats/";

/// Application screens/routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Title screen shown on startup
    Splash,
    /// Question flow
    Quiz,
    /// Final score screen; carries the raw score parameter from the path
    Stats { score: String },
}

/// Route identity without parameters, used for `pop_up_to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Splash,
    Quiz,
    Stats,
}

impl Default for Route {
    fn default() -> Self {
        Self::Splash
    }
}

impl Route {
    /// Stats route with the score encoded as its parameter
    pub fn stats(score: u32) -> Self {
        Self::Stats {
            score: score.to_string(),
        }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Splash => RouteKind::Splash,
            Route::Quiz => RouteKind::Quiz,
            Route::Stats { .. } => RouteKind::Stats,
        }
    }

    /// Encode the route as a path: `splash`, `quiz`, `Finalstats/{score}`
    pub fn path(&self) -> String {
        match self {
            Route::Splash => SPLASH_PATH.to_string(),
            Route::Quiz => QUIZ_PATH.to_string(),
            Route::Stats { score } => format!("{}{}", STATS_PREFIX, score),
        }
    }

    /// Decode a path produced by [`Route::path`]. Unknown paths yield `None`.
    /// The stats parameter is kept verbatim; decoding it is the stats screen's job.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            SPLASH_PATH => Some(Route::Splash),
            QUIZ_PATH => Some(Route::Quiz),
            _ => path.strip_prefix(STATS_PREFIX).map(|score| Route::Stats {
                score: score.to_string(),
            }),
        }
    }
}

/// Options applied while navigating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Pop entries down to the most recent one of this kind before pushing.
    /// The flag controls whether that entry is popped as well.
    pub pop_up_to: Option<(RouteKind, bool)>,
}

impl NavOptions {
    pub fn pop_up_to(kind: RouteKind, inclusive: bool) -> Self {
        Self {
            pop_up_to: Some((kind, inclusive)),
        }
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move highlight up (arrow up, k)
    Up,
    /// Move highlight down (arrow down, j)
    Down,
    /// Select the highlighted option (Space)
    Select,
    /// Select an option directly by its zero-based index (1-9)
    Choose(usize),
    /// Confirm the current answer (Enter)
    Confirm,
    /// Go back (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Navigation controller holding the back stack
#[derive(Debug)]
pub struct Navigator {
    back_stack: Vec<Route>,
    should_quit: bool,
}

impl Navigator {
    /// Create a navigator starting at the splash screen
    pub fn new() -> Self {
        Self::with_start(Route::Splash)
    }

    /// Create a navigator with an explicit start destination
    pub fn with_start(start: Route) -> Self {
        Self {
            back_stack: vec![start],
            should_quit: false,
        }
    }

    /// Get the active route
    pub fn current(&self) -> &Route {
        // Never empty: navigate always pushes and pop_back keeps the root entry
        &self.back_stack[self.back_stack.len() - 1]
    }

    /// Entries in the back stack, oldest first
    pub fn back_stack(&self) -> &[Route] {
        &self.back_stack
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Navigate to `route`, trimming history first according to `options`
    pub fn navigate(&mut self, route: Route, options: NavOptions) {
        let from = self.current().path();

        if let Some((kind, inclusive)) = options.pop_up_to {
            match self.back_stack.iter().rposition(|r| r.kind() == kind) {
                Some(pos) => {
                    let keep = if inclusive { pos } else { pos + 1 };
                    self.back_stack.truncate(keep);
                }
                None => warn!(?kind, "pop_up_to target not in back stack"),
            }
        }

        info!(from = %from, to = %route.path(), "navigate");
        self.back_stack.push(route);
    }

    /// Pop the active route. When it is the only entry the app quits instead.
    pub fn pop_back(&mut self) -> bool {
        if self.back_stack.len() > 1 {
            self.back_stack.pop();
            debug!(to = %self.current().path(), "navigate back");
            true
        } else {
            debug!("back stack exhausted, quitting");
            self.should_quit = true;
            false
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,

            KeyCode::Char(' ') => NavigationAction::Select,
            KeyCode::Char(c @ '1'..='9') => NavigationAction::Choose(c as usize - '1' as usize),
            KeyCode::Enter => NavigationAction::Confirm,

            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_navigator_creation() {
        let nav = Navigator::new();
        assert_eq!(*nav.current(), Route::Splash);
        assert!(!nav.should_quit());
        assert_eq!(nav.back_stack().len(), 1);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Splash.path(), "splash");
        assert_eq!(Route::Quiz.path(), "quiz");
        assert_eq!(Route::stats(4).path(), "Finalstats/4");

        assert_eq!(Route::parse("quiz"), Some(Route::Quiz));
        assert_eq!(Route::parse("Finalstats/4"), Some(Route::stats(4)));
        assert_eq!(
            Route::parse("Finalstats/"),
            Some(Route::Stats { score: String::new() })
        );
        assert_eq!(Route::parse("settings"), None);
    }

    #[test]
    fn test_plain_navigate_keeps_history() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Quiz, NavOptions::default());
        assert_eq!(nav.back_stack(), &[Route::Splash, Route::Quiz]);

        assert!(nav.pop_back());
        assert_eq!(*nav.current(), Route::Splash);
    }

    #[test]
    fn test_pop_up_to_inclusive() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Quiz, NavOptions::pop_up_to(RouteKind::Splash, true));
        assert_eq!(nav.back_stack(), &[Route::Quiz]);
    }

    #[test]
    fn test_pop_up_to_exclusive() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Quiz, NavOptions::default());
        nav.navigate(Route::stats(1), NavOptions::pop_up_to(RouteKind::Splash, false));
        assert_eq!(nav.back_stack(), &[Route::Splash, Route::stats(1)]);
    }

    #[test]
    fn test_pop_up_to_missing_target_just_pushes() {
        let mut nav = Navigator::with_start(Route::Quiz);
        nav.navigate(Route::stats(2), NavOptions::pop_up_to(RouteKind::Splash, true));
        assert_eq!(nav.back_stack(), &[Route::Quiz, Route::stats(2)]);
    }

    #[test]
    fn test_back_from_root_quits() {
        let mut nav = Navigator::new();
        assert!(!nav.pop_back());
        assert!(nav.should_quit());
        assert_eq!(*nav.current(), Route::Splash);
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            NavigationAction::None
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            NavigationAction::Down
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)),
            NavigationAction::Choose(2)
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Confirm
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
    }
}
