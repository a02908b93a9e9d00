//! Quiz screen implementation
//!
//! Renders the current question with radio-style options. The highlight
//! cursor only moves; an option becomes the selected answer when chosen
//! explicitly, so confirming without a selection is possible.

use crate::models::{ConfirmOutcome, QuestionBank, QuizState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Quiz screen component
#[derive(Debug)]
pub struct QuizScreen {
    quiz: QuizState,
    cursor: usize,
    list_state: ListState,
}

impl QuizScreen {
    /// Create a new quiz screen over the given questions
    pub fn new(questions: QuestionBank) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            quiz: QuizState::new(questions),
            cursor: 0,
            list_state,
        }
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    /// Index of the highlighted option
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn option_count(&self) -> usize {
        self.quiz.current_question().options().len()
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.list_state.select(Some(index));
    }

    /// Move highlight up
    pub fn select_previous(&mut self) {
        let count = self.option_count();
        let index = if self.cursor > 0 { self.cursor - 1 } else { count - 1 };
        self.set_cursor(index);
    }

    /// Move highlight down
    pub fn select_next(&mut self) {
        let count = self.option_count();
        let index = if self.cursor + 1 < count { self.cursor + 1 } else { 0 };
        self.set_cursor(index);
    }

    /// Make the highlighted option the selected answer
    pub fn choose_highlighted(&mut self) {
        self.quiz.select_option(self.cursor);
    }

    /// Select an option by index, moving the highlight with it
    pub fn choose(&mut self, index: usize) -> bool {
        if self.quiz.select_option(index) {
            self.set_cursor(index);
            true
        } else {
            false
        }
    }

    /// Confirm the current answer
    pub fn confirm(&mut self) -> ConfirmOutcome {
        let outcome = self.quiz.confirm();
        if let ConfirmOutcome::Advanced { .. } = outcome {
            self.set_cursor(0);
        }
        outcome
    }

    /// Render the quiz screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress
                Constraint::Length(5), // Prompt
                Constraint::Min(5),    // Options
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_progress(f, chunks[0]);
        self.render_prompt(f, chunks[1]);
        self.render_options(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect) {
        let number = self.quiz.current_index() + 1;
        let total = self.quiz.total_questions();

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progress"))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(number as f64 / total as f64)
            .label(format!("Question {} of {}", number, total));
        f.render_widget(gauge, area);
    }

    fn render_prompt(&self, f: &mut Frame, area: Rect) {
        let prompt = Paragraph::new(self.quiz.current_question().prompt())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(prompt, area);
    }

    fn render_options(&mut self, f: &mut Frame, area: Rect) {
        let selected = self.quiz.selected_answer();
        let items: Vec<ListItem> = self
            .quiz
            .current_question()
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let marker = if selected == Some(option.as_str()) { "(•)" } else { "( )" };
                ListItem::new(format!("{} {}. {}", marker, i + 1, option))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Answers"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Space/1-3", key),
            Span::raw(" Select  "),
            Span::styled("Enter", key),
            Span::raw(" Confirm  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new(QuestionBank::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_cursor_wraps() {
        let mut screen = QuizScreen::default();
        screen.select_previous();
        assert_eq!(screen.cursor(), 2);
        screen.select_next();
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_moving_cursor_does_not_select() {
        let mut screen = QuizScreen::default();
        screen.select_next();
        assert!(screen.quiz().selected_answer().is_none());

        screen.choose_highlighted();
        assert_eq!(screen.quiz().selected_answer(), Some("Islamabad"));
    }

    #[test]
    fn test_choose_out_of_range() {
        let mut screen = QuizScreen::default();
        assert!(!screen.choose(5));
        assert_eq!(screen.cursor(), 0);
        assert!(screen.quiz().selected_answer().is_none());
    }

    #[test]
    fn test_confirm_resets_cursor() {
        let mut screen = QuizScreen::default();
        assert!(screen.choose(1));
        assert_eq!(screen.confirm(), ConfirmOutcome::Advanced { next_index: 1 });
        assert_eq!(screen.cursor(), 0);
        assert_eq!(screen.quiz().score(), 1);
    }

    #[test]
    fn test_render_shows_question_and_options() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut screen = QuizScreen::default();
        screen.choose(0);
        terminal.draw(|f| screen.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("What is the capital of Pakistan?"));
        assert!(text.contains("Question 1 of 7"));
        assert!(text.contains("(•) 1. Lahore"));
        assert!(text.contains("( ) 2. Islamabad"));
    }
}
