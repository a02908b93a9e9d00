//! Splash screen implementation
//!
//! Shows the title, then hands control to the quiz once a one-shot timer
//! fires. Input is not accepted here.

use crate::app::AppEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{sleep_until, Instant},
};
use tracing::debug;

/// Splash screen component
#[derive(Debug)]
pub struct SplashScreen {
    title: String,
    delay: Duration,
    timer: Option<JoinHandle<()>>,
}

impl SplashScreen {
    /// Create a new splash screen
    pub fn new(title: &str, delay: Duration) -> Self {
        Self {
            title: title.to_string(),
            delay,
            timer: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the timeout has already been scheduled
    pub fn is_scheduled(&self) -> bool {
        self.timer.is_some()
    }

    /// Schedule the one-shot timeout. Only the first call has any effect.
    /// Must be called from within a tokio runtime.
    pub fn enter(&mut self, tx: mpsc::Sender<AppEvent>) {
        if self.timer.is_some() {
            return;
        }

        // Deadline is fixed now rather than when the task is first polled
        let deadline = Instant::now() + self.delay;
        debug!(delay = %humantime::format_duration(self.delay), "splash timer scheduled");

        self.timer = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            if tx.send(AppEvent::SplashElapsed).await.is_err() {
                debug!("splash timer fired after app shut down");
            }
        }));
    }

    /// Render the splash screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(3), // Title
                Constraint::Percentage(40),
            ])
            .split(size);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(15),
                Constraint::Percentage(70),
                Constraint::Percentage(15),
            ])
            .split(chunks[1]);

        let title = Paragraph::new(self.title.as_str())
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Green)),
            );
        f.render_widget(title, horizontal[1]);
    }
}
