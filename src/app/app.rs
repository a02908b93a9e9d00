//! Main application controller
//!
//! Couples the terminal to the screen flow and runs the render loop.

use crate::{
    app::{flow::QuizFlow, state::Navigator, tui::Tui},
    config::QuizConfig,
    models::QuestionBank,
    QuizError, Result,
};
use tracing::info;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Screens and navigation
    flow: QuizFlow,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &QuizConfig) -> Result<Self> {
        let tui = Tui::new(config.tick_rate())
            .map_err(|e| QuizError::TuiError(format!("Failed to open terminal: {}", e)))?;

        Ok(Self {
            tui,
            flow: QuizFlow::new(config, QuestionBank::builtin())?,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| QuizError::TuiError(format!("Failed to set up terminal: {}", e)))
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        info!("quiz started");
        self.flow.start();

        while !self.flow.should_quit() {
            self.flow.poll_events();
            self.draw()?;
            self.handle_input()?;
            // Crossterm polling blocks; let the timer task make progress
            tokio::task::yield_now().await;
        }

        info!(route = %self.flow.current_route().path(), "quiz exited");
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let flow = &mut self.flow;
        self.tui.draw(|f| flow.render(f))?;
        Ok(())
    }

    /// Handle keyboard events and update state
    fn handle_input(&mut self) -> Result<()> {
        if let Some(key) = self.tui.next_key()? {
            let action = Navigator::key_to_navigation(key);
            self.flow.handle_action(action);
        }
        Ok(())
    }
}
