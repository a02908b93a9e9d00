//! Question data model
//!
//! Immutable multiple-choice questions and the built-in question bank.

use crate::{QuizError, Result};

/// Number of answer options every question carries
pub const OPTIONS_PER_QUESTION: usize = 3;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Create a question, checking that the correct answer is one of the options
    pub fn new(prompt: &str, options: [&str; OPTIONS_PER_QUESTION], correct_answer: &str) -> Result<Self> {
        let question = Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
        };
        question.validate()?;
        Ok(question)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Exact string comparison against the correct answer
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Validate the question invariants
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(QuizError::QuestionError("Prompt must not be empty".to_string()));
        }

        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuizError::QuestionError(format!(
                "Question '{}' has {} options (expected {})",
                self.prompt,
                self.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }

        if !self.options.iter().any(|o| o == &self.correct_answer) {
            return Err(QuizError::QuestionError(format!(
                "Correct answer '{}' is not an option of '{}'",
                self.correct_answer, self.prompt
            )));
        }

        Ok(())
    }
}

const BUILTIN_QUESTIONS: [(&str, [&str; OPTIONS_PER_QUESTION], &str); 7] = [
    ("What is the capital of Pakistan?", ["Lahore", "Islamabad", "Karachi"], "Islamabad"),
    ("How many provinces are there in Pakistan?", ["10", "7", "5"], "5"),
    (
        "Who wrote Pakistan's National Anthem?",
        ["Allama Iqbal", "Hafeez Jalandhari", "Quaid-e-Azam"],
        "Hafeez Jalandhari",
    ),
    ("What is the national language of Pakistan?", ["Urdu", "Punjabi", "Pashto"], "Urdu"),
    (
        "Who was the Founder of Pakistan",
        ["Quaid-e-Azam", "Mirza Ghalib", "Sir Syed Ahmed Khan"],
        "Quaid-e-Azam",
    ),
    ("What is the national sport of Pakistan", ["Cricket", "Football", "Hockey"], "Hockey"),
    ("Which is the highest mountain peak in Pakistan?", ["Everest", "K2", "Shimla"], "K2"),
];

/// Ordered, non-empty, read-only list of questions
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already constructed questions
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::QuestionError(
                "Question bank must contain at least one question".to_string(),
            ));
        }
        for question in &questions {
            question.validate()?;
        }
        Ok(Self { questions })
    }

    /// The seven compiled-in questions
    pub fn builtin() -> Self {
        let questions = BUILTIN_QUESTIONS
            .iter()
            .map(|(prompt, options, correct)| Question {
                prompt: prompt.to_string(),
                options: options.iter().map(|o| o.to_string()).collect(),
                correct_answer: correct.to_string(),
            })
            .collect();
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
