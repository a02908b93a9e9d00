//! Stats screen implementation
//!
//! Terminal screen showing the final score decoded from the route parameter.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::warn;

/// Decode the score route parameter. Anything that is not an unsigned
/// integer becomes 0.
pub fn parse_score_param(raw: &str) -> u32 {
    match raw.parse::<u32>() {
        Ok(score) => score,
        Err(e) => {
            // Malformed parameters are masked rather than surfaced
            warn!(param = raw, error = %e, "malformed score parameter, showing 0");
            0
        }
    }
}

/// Stats screen component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsScreen {
    score: u32,
}

impl StatsScreen {
    pub fn new(score: u32) -> Self {
        Self { score }
    }

    /// Build from the raw route parameter
    pub fn from_param(raw: &str) -> Self {
        Self::new(parse_score_param(raw))
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Render the stats screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Length(6),
                Constraint::Min(0),
            ])
            .split(size);

        let lines = vec![
            Line::styled(
                "Quiz has ended!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                format!("Your score: {}", self.score),
                Style::default().fg(Color::White),
            ),
        ];

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green))
                    .title("Results"),
            );
        f.render_widget(body, chunks[1]);
    }
}
