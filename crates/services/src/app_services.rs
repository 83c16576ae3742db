use std::sync::Arc;
use std::time::Duration;

use storage::repository::Storage;

use crate::Clock;
use crate::analyzer::{Analyzer, HttpTextGenerator, TextGenerator};
use crate::completion::CompletionService;
use crate::error::AppServicesError;
use crate::quiz_loop::DEFAULT_TRANSITION_DELAY;
use crate::session_store::SessionStore;

/// Runtime knobs resolved by the binary.
#[derive(Debug, Clone)]
pub struct ServicesConfig {
    pub transition_delay: Duration,
    pub analysis_timeout: Option<Duration>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            transition_delay: DEFAULT_TRANSITION_DELAY,
            analysis_timeout: Some(crate::analyzer::DEFAULT_TIMEOUT),
        }
    }
}

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    transition_delay: Duration,
    session_store: Arc<SessionStore>,
    analyzer: Arc<Analyzer>,
    completion: Arc<CompletionService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP text generator from env.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the HTTP client cannot be built.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: ServicesConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let generator = HttpTextGenerator::from_env()?;
        if !generator.enabled() {
            tracing::warn!("FLAGS_AI_API_KEY not set; analyses will use the fallback text");
        }
        Ok(Self::from_parts(storage, Arc::new(generator), clock, config))
    }

    #[must_use]
    pub fn from_parts(
        storage: Storage,
        generator: Arc<dyn TextGenerator>,
        clock: Clock,
        config: ServicesConfig,
    ) -> Self {
        let session_store = Arc::new(SessionStore::new(clock, Arc::clone(&storage.entries)));
        let analyzer =
            Arc::new(Analyzer::new(generator).with_timeout(config.analysis_timeout));
        let completion = Arc::new(CompletionService::new(
            Arc::clone(&analyzer),
            Arc::clone(&session_store),
        ));

        Self {
            transition_delay: config.transition_delay,
            session_store,
            analyzer,
            completion,
        }
    }

    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        self.transition_delay
    }

    #[must_use]
    pub fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session_store)
    }

    #[must_use]
    pub fn analyzer(&self) -> Arc<Analyzer> {
        Arc::clone(&self.analyzer)
    }

    #[must_use]
    pub fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }
}
