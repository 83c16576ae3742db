use std::sync::Arc;

use flags_core::model::{Answer, GameSession, UserProfile};

use crate::analyzer::{Analysis, Analyzer};
use crate::session_store::SessionStore;

/// Result of finishing a quiz: the analysis shown to the user and the stored record, if saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSession {
    pub analysis: Analysis,
    pub session: Option<GameSession>,
}

/// Runs the analysis for a finished quiz and records the session.
#[derive(Clone)]
pub struct CompletionService {
    analyzer: Arc<Analyzer>,
    store: Arc<SessionStore>,
}

impl CompletionService {
    #[must_use]
    pub fn new(analyzer: Arc<Analyzer>, store: Arc<SessionStore>) -> Self {
        Self { analyzer, store }
    }

    /// Analyze and persist. Never fails: a save error is logged and the analysis is still returned.
    pub async fn complete(&self, profile: &UserProfile, answers: &[Answer]) -> CompletedSession {
        let analysis = self.analyzer.analyze(profile, answers).await;
        let session = match self
            .store
            .append(profile.clone(), answers.to_vec(), analysis.text.clone())
            .await
        {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "failed to save completed session");
                None
            }
        };
        CompletedSession { analysis, session }
    }
}
