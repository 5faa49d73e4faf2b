//! Interactive questions and the prompters that answer them.
//!
//! The create pipeline never talks to a terminal directly. It hands one [`Question`] at a
//! time to a [`Prompter`] and waits for the [`Answer`] before asking the next one. The
//! binary uses [`TerminalPrompter`]; tests script their answers.

pub mod terminal;

pub use terminal::TerminalPrompter;

use anyhow::Result;
use std::future::Future;

use crate::core::CreateError;

/// What kind of answer a question expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Yes or no
    Confirm {
        /// Answer used when the user just presses enter
        default: bool,
    },
    /// Free text
    Input {
        /// Whether an empty answer is acceptable
        required: bool,
    },
    /// Exactly one of `choices`
    Select {
        /// Offered labels
        choices: Vec<String>,
    },
    /// Any subset of `choices`, possibly empty
    MultiSelect {
        /// Offered labels
        choices: Vec<String>,
    },
}

/// A single question of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Request field the question resolves, e.g. `name`
    pub name: String,
    /// Text shown to the user
    pub message: String,
    /// Expected answer
    pub kind: QuestionKind,
}

impl Question {
    /// A yes/no question.
    pub fn confirm(name: &str, message: impl Into<String>, default: bool) -> Self {
        Self::new(name, message, QuestionKind::Confirm {
            default,
        })
    }

    /// A free text question.
    pub fn input(name: &str, message: impl Into<String>, required: bool) -> Self {
        Self::new(name, message, QuestionKind::Input {
            required,
        })
    }

    /// A single choice question.
    pub fn select(name: &str, message: impl Into<String>, choices: Vec<String>) -> Self {
        Self::new(name, message, QuestionKind::Select {
            choices,
        })
    }

    /// A multiple choice question.
    pub fn multi_select(name: &str, message: impl Into<String>, choices: Vec<String>) -> Self {
        Self::new(name, message, QuestionKind::MultiSelect {
            choices,
        })
    }

    fn new(name: &str, message: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
            kind,
        }
    }
}

/// The answer to one [`Question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answer to a confirm question
    Bool(bool),
    /// Answer to an input question
    Text(String),
    /// Answer to a select question
    Choice(String),
    /// Answer to a multi-select question
    Choices(Vec<String>),
}

impl Answer {
    /// The answer to a confirm question.
    pub fn into_bool(self) -> Result<bool, CreateError> {
        match self {
            Answer::Bool(value) => Ok(value),
            other => Err(unexpected("yes/no", &other)),
        }
    }

    /// The answer to an input or select question.
    pub fn into_text(self) -> Result<String, CreateError> {
        match self {
            Answer::Text(value) | Answer::Choice(value) => Ok(value),
            other => Err(unexpected("text", &other)),
        }
    }

    /// The answer to a multi-select question.
    pub fn into_choices(self) -> Result<Vec<String>, CreateError> {
        match self {
            Answer::Choices(values) => Ok(values),
            other => Err(unexpected("a list of choices", &other)),
        }
    }
}

fn unexpected(expected: &str, answer: &Answer) -> CreateError {
    CreateError::Other {
        message: format!("Expected {expected} as answer, got {answer:?}"),
    }
}

/// Asks questions, one at a time.
///
/// Implementations must not return before the question is answered. A cancelled session is
/// reported as [`CreateError::PromptCancelled`].
pub trait Prompter: Send + Sync {
    /// Ask `question` and wait for the answer.
    fn run(&self, question: &Question) -> impl Future<Output = Result<Answer>> + Send;
}
