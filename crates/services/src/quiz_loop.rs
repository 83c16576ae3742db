use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use flags_core::flow::{FlowError, FlowProgress, FlowStep, QuizFlow};
use flags_core::model::{Flag, Question};

pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(400);

/// Drives a [`QuizFlow`] with a pacing pause between a choice and the next question.
///
/// Clones share the same flow, so a second submit during the pause is rejected
/// with `FlowError::Locked`.
#[derive(Clone)]
pub struct QuizLoop {
    flow: Arc<Mutex<QuizFlow>>,
    delay: Duration,
}

impl QuizLoop {
    /// # Errors
    ///
    /// Returns `FlowError::Empty` if no questions are provided.
    pub fn new(questions: impl Into<Vec<Question>>, delay: Duration) -> Result<Self, FlowError> {
        Ok(Self {
            flow: Arc::new(Mutex::new(QuizFlow::new(questions)?)),
            delay,
        })
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Copy of the current flow state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> QuizFlow {
        self.lock().clone()
    }

    #[must_use]
    pub fn progress(&self) -> FlowProgress {
        self.lock().progress()
    }

    /// Record `choice` for the current question, wait out the pacing delay, then advance.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Locked` if another submit is still pausing and
    /// `FlowError::Finished` after completion.
    pub async fn submit(&self, choice: Flag) -> Result<FlowStep, FlowError> {
        {
            let mut flow = self.lock();
            let answer = flow.submit_choice(choice)?;
            tracing::debug!(question = %answer.question_id, choice = choice.code(), "choice recorded");
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.lock().finish_transition()
    }

    fn lock(&self) -> MutexGuard<'_, QuizFlow> {
        self.flow.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
