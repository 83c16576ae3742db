//! Sequencing of the quiz: one question at a time, one answer per question.

use thiserror::Error;

use crate::model::{Answer, Flag, Question};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("quiz has no questions")]
    Empty,

    #[error("a transition is already in progress")]
    Locked,

    #[error("no transition is pending")]
    NotPending,

    #[error("quiz already completed")]
    Finished,
}

/// Result of finishing the transition that follows a submitted choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    /// The next question is now current.
    Advanced,
    /// Every question has been answered. Yielded exactly once.
    Completed(Vec<Answer>),
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowProgress {
    pub answered: usize,
    pub total: usize,
    /// Position of the current question (0-based) as a percentage of the quiz.
    pub percent: u32,
}

/// Quiz flow controller.
///
/// Submitting a choice records the answer and locks the controller until
/// [`QuizFlow::finish_transition`] is called, which either advances to the next
/// question or completes the quiz.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Answer>,
    locked: bool,
    finished: bool,
}

impl QuizFlow {
    /// # Errors
    ///
    /// Returns `FlowError::Empty` if no questions are provided.
    pub fn new(questions: impl Into<Vec<Question>>) -> Result<Self, FlowError> {
        let questions = questions.into();
        if questions.is_empty() {
            return Err(FlowError::Empty);
        }
        let capacity = questions.len();
        Ok(Self {
            questions,
            current: 0,
            answers: Vec::with_capacity(capacity),
            locked: false,
            finished: false,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn progress(&self) -> FlowProgress {
        let total = self.questions.len();
        let percent = u32::try_from(self.current * 100 / total).unwrap_or(100);
        FlowProgress {
            answered: self.answers.len(),
            total,
            percent,
        }
    }

    /// Record `choice` for the current question and lock until the transition finishes.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Locked` while a transition is pending and
    /// `FlowError::Finished` once the quiz is complete.
    pub fn submit_choice(&mut self, choice: Flag) -> Result<&Answer, FlowError> {
        if self.finished {
            return Err(FlowError::Finished);
        }
        if self.locked {
            return Err(FlowError::Locked);
        }
        let question = self.questions.get(self.current).ok_or(FlowError::Finished)?;
        self.answers.push(Answer::for_question(question, choice));
        self.locked = true;
        self.answers.last().ok_or(FlowError::Finished)
    }

    /// Finish the pending transition.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotPending` if no choice was submitted and
    /// `FlowError::Finished` once the quiz is complete.
    pub fn finish_transition(&mut self) -> Result<FlowStep, FlowError> {
        if self.finished {
            return Err(FlowError::Finished);
        }
        if !self.locked {
            return Err(FlowError::NotPending);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.locked = false;
            Ok(FlowStep::Advanced)
        } else {
            self.finished = true;
            Ok(FlowStep::Completed(self.answers.clone()))
        }
    }
}
