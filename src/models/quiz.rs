//! Quiz state machine
//!
//! Tracks the current question, the pending selection and the running score.
//! Confirming the last question moves the quiz into its terminal phase.

use super::question::{Question, QuestionBank};
use tracing::{debug, info, warn};

/// Phase of a quiz run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for confirmation of question `i`
    AnsweringQuestion(usize),
    /// All questions confirmed
    Finished(u32),
}

/// Result of confirming the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Moved on to the next question
    Advanced { next_index: usize },
    /// The last question was confirmed
    Finished { score: u32 },
    /// The quiz had already finished; nothing changed
    AlreadyFinished { score: u32 },
}

/// Mutable state of one quiz run
#[derive(Debug, Clone)]
pub struct QuizState {
    questions: QuestionBank,
    current_index: usize,
    selected_answer: Option<String>,
    score: u32,
    finished: bool,
}

impl QuizState {
    pub fn new(questions: QuestionBank) -> Self {
        Self {
            questions,
            current_index: 0,
            selected_answer: None,
            score: 0,
            finished: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        // The bank is never empty and the index never leaves [0, len)
        &self.questions.as_slice()[self.current_index]
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.finished {
            QuizPhase::Finished(self.score)
        } else {
            QuizPhase::AnsweringQuestion(self.current_index)
        }
    }

    /// Record a selection for the current question. Last selection wins.
    pub fn select_answer(&mut self, option: &str) {
        debug!(question = self.current_index, option, "answer selected");
        self.selected_answer = Some(option.to_string());
    }

    /// Select the option at `index` of the current question.
    /// Returns false and leaves the state untouched when out of range.
    pub fn select_option(&mut self, index: usize) -> bool {
        match self.current_question().options().get(index).cloned() {
            Some(option) => {
                self.select_answer(&option);
                true
            }
            None => false,
        }
    }

    /// Lock in the current selection and advance
    pub fn confirm(&mut self) -> ConfirmOutcome {
        if self.finished {
            warn!(score = self.score, "confirm after quiz finished ignored");
            return ConfirmOutcome::AlreadyFinished { score: self.score };
        }

        let correct = match &self.selected_answer {
            Some(answer) => self.current_question().is_correct(answer),
            None => false,
        };
        if correct {
            self.score += 1;
        }
        debug!(question = self.current_index, correct, score = self.score, "answer confirmed");

        if self.is_last_question() {
            self.finished = true;
            info!(score = self.score, total = self.total_questions(), "quiz finished");
            ConfirmOutcome::Finished { score: self.score }
        } else {
            self.current_index += 1;
            self.selected_answer = None;
            ConfirmOutcome::Advanced {
                next_index: self.current_index,
            }
        }
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(QuestionBank::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CORRECT: [&str; 7] = [
        "Islamabad",
        "5",
        "Hafeez Jalandhari",
        "Urdu",
        "Quaid-e-Azam",
        "Hockey",
        "K2",
    ];

    #[test]
    fn test_initial_state() {
        let quiz = QuizState::default();
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(quiz.selected_answer().is_none());
        assert_eq!(quiz.phase(), QuizPhase::AnsweringQuestion(0));
    }

    #[test]
    fn test_correct_answer_increments_score() {
        let mut quiz = QuizState::default();
        quiz.select_answer("Islamabad");
        assert_eq!(quiz.confirm(), ConfirmOutcome::Advanced { next_index: 1 });
        assert_eq!(quiz.score(), 1);
        assert!(quiz.selected_answer().is_none());
    }

    #[test]
    fn test_wrong_answer_keeps_score() {
        let mut quiz = QuizState::default();
        quiz.select_answer("Lahore");
        quiz.confirm();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_index(), 1);
    }

    #[test]
    fn test_last_selection_wins() {
        let mut quiz = QuizState::default();
        quiz.select_answer("Islamabad");
        quiz.select_answer("Karachi");
        quiz.confirm();
        assert_eq!(quiz.score(), 0);

        quiz.select_answer("10");
        quiz.select_answer("5");
        quiz.confirm();
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_select_option_by_index() {
        let mut quiz = QuizState::default();
        assert!(quiz.select_option(1));
        assert_eq!(quiz.selected_answer(), Some("Islamabad"));

        assert!(!quiz.select_option(3));
        assert_eq!(quiz.selected_answer(), Some("Islamabad"));
    }

    #[test]
    fn test_all_correct_scores_seven() {
        let mut quiz = QuizState::default();
        let mut outcome = None;
        for answer in ALL_CORRECT {
            quiz.select_answer(answer);
            outcome = Some(quiz.confirm());
        }
        assert_eq!(outcome, Some(ConfirmOutcome::Finished { score: 7 }));
        assert_eq!(quiz.phase(), QuizPhase::Finished(7));
    }

    #[test]
    fn test_no_selection_scores_zero() {
        let mut quiz = QuizState::default();
        for i in 0..6 {
            assert_eq!(quiz.confirm(), ConfirmOutcome::Advanced { next_index: i + 1 });
        }
        assert_eq!(quiz.confirm(), ConfirmOutcome::Finished { score: 0 });
    }

    #[test]
    fn test_finishes_exactly_once() {
        let mut quiz = QuizState::default();
        for _ in 0..7 {
            quiz.confirm();
        }
        assert_eq!(quiz.current_index(), 6);
        assert_eq!(quiz.confirm(), ConfirmOutcome::AlreadyFinished { score: 0 });
        assert_eq!(quiz.current_index(), 6);
    }
}
