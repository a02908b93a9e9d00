//! Screen flow controller
//!
//! Owns the navigator and the per-route screens, and applies key actions
//! and timer events to them. Terminal handling lives in [`crate::app::App`];
//! this type never touches stdout.

use crate::{
    app::{
        screens::{QuizScreen, SplashScreen, StatsScreen},
        state::{NavOptions, NavigationAction, Navigator, Route, RouteKind},
        AppEvent,
    },
    config::QuizConfig,
    models::{ConfirmOutcome, QuestionBank},
    Result,
};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::debug;

/// Splash → Quiz → Stats controller
#[derive(Debug)]
pub struct QuizFlow {
    navigator: Navigator,
    questions: QuestionBank,
    splash_screen: SplashScreen,
    quiz_screen: QuizScreen,
    stats_screen: StatsScreen,
    event_tx: mpsc::Sender<AppEvent>,
    event_rx: mpsc::Receiver<AppEvent>,
}

impl QuizFlow {
    /// Create a flow positioned on the splash screen. Nothing is scheduled
    /// until [`QuizFlow::start`] runs.
    pub fn new(config: &QuizConfig, questions: QuestionBank) -> Result<Self> {
        config.validate()?;
        let (event_tx, event_rx) = mpsc::channel(8);

        Ok(Self {
            navigator: Navigator::new(),
            splash_screen: SplashScreen::new(&config.title, config.splash_delay()?),
            quiz_screen: QuizScreen::new(questions.clone()),
            stats_screen: StatsScreen::default(),
            questions,
            event_tx,
            event_rx,
        })
    }

    /// Enter the start route. Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if *self.navigator.current() == Route::Splash {
            self.splash_screen.enter(self.event_tx.clone());
        }
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn quiz_screen(&self) -> &QuizScreen {
        &self.quiz_screen
    }

    pub fn stats_screen(&self) -> &StatsScreen {
        &self.stats_screen
    }

    pub fn should_quit(&self) -> bool {
        self.navigator.should_quit()
    }

    /// Apply any pending timer events without blocking
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next timer event and apply it
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        let event = self.event_rx.recv().await?;
        self.handle_event(event.clone());
        Some(event)
    }

    /// Apply a timer event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SplashElapsed if *self.navigator.current() == Route::Splash => {
                self.go(Route::Quiz, NavOptions::pop_up_to(RouteKind::Splash, true));
            }
            AppEvent::SplashElapsed => {
                debug!(route = %self.navigator.current().path(), "stale splash timeout ignored");
            }
        }
    }

    /// Apply a key action to the active screen
    pub fn handle_action(&mut self, action: NavigationAction) {
        if action == NavigationAction::Quit {
            self.navigator.quit();
            return;
        }

        match self.navigator.current().clone() {
            // No input accepted while the splash is up
            Route::Splash => {}
            Route::Quiz => self.handle_quiz_action(action),
            Route::Stats { .. } => {
                if action == NavigationAction::Back {
                    self.navigator.pop_back();
                }
            }
        }
    }

    fn handle_quiz_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.quiz_screen.select_previous(),
            NavigationAction::Down => self.quiz_screen.select_next(),
            NavigationAction::Select => self.quiz_screen.choose_highlighted(),
            NavigationAction::Choose(index) => {
                self.quiz_screen.choose(index);
            }
            NavigationAction::Confirm => {
                if let ConfirmOutcome::Finished { score } = self.quiz_screen.confirm() {
                    self.go(Route::stats(score), NavOptions::pop_up_to(RouteKind::Quiz, true));
                }
            }
            NavigationAction::Back => {
                self.navigator.pop_back();
            }
            _ => {}
        }
    }

    /// Navigate and set up the destination screen
    fn go(&mut self, route: Route, options: NavOptions) {
        match &route {
            Route::Splash => {}
            Route::Quiz => self.quiz_screen = QuizScreen::new(self.questions.clone()),
            Route::Stats { score } => self.stats_screen = StatsScreen::from_param(score),
        }
        self.navigator.navigate(route, options);
    }

    /// Draw the active screen
    pub fn render(&mut self, f: &mut Frame) {
        match self.navigator.current() {
            Route::Splash => self.splash_screen.render(f),
            Route::Quiz => self.quiz_screen.render(f),
            Route::Stats { .. } => self.stats_screen.render(f),
        }
    }
}
