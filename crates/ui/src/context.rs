use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use flags_core::model::Language;
use services::{CompletionService, SessionStore};

pub trait UiApp: Send + Sync {
    fn initial_language(&self) -> Language;
    fn transition_delay(&self) -> Duration;
    fn export_dir(&self) -> PathBuf;

    fn session_store(&self) -> Arc<SessionStore>;
    fn completion(&self) -> Arc<CompletionService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_language: Language,
    transition_delay: Duration,
    export_dir: PathBuf,

    session_store: Arc<SessionStore>,
    completion: Arc<CompletionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_language: app.initial_language(),
            transition_delay: app.transition_delay(),
            export_dir: app.export_dir(),
            session_store: app.session_store(),
            completion: app.completion(),
        }
    }

    #[must_use]
    pub fn initial_language(&self) -> Language {
        self.initial_language
    }

    /// Pause between a quiz choice and the next question.
    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        self.transition_delay
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    #[must_use]
    pub fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session_store)
    }

    #[must_use]
    pub fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
