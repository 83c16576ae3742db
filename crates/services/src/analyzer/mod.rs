//! Turns a profile and its answers into a prose analysis.
//!
//! Failures never escape: every error resolves to a localized fallback text,
//! tagged with an [`AnalysisOutcome`] so callers can tell them apart from real output.

use std::sync::Arc;
use std::time::Duration;

use flags_core::model::{Answer, Language, UserProfile};

use crate::error::GenerationError;

mod generator;
pub mod prompt;

pub use generator::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeneratorConfig, HttpTextGenerator, TextGenerator};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// How an analysis text came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Generated,
    EmptyFallback,
    ErrorFallback,
    TimeoutFallback,
}

impl AnalysisOutcome {
    #[must_use]
    pub fn is_fallback(self) -> bool {
        !matches!(self, AnalysisOutcome::Generated)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub text: String,
    pub outcome: AnalysisOutcome,
}

impl Analysis {
    fn fallback(language: Language, outcome: AnalysisOutcome) -> Self {
        Self {
            text: fallback_text(language, outcome).to_string(),
            outcome,
        }
    }
}

/// Fixed localized text shown in place of a generated analysis.
#[must_use]
pub fn fallback_text(language: Language, outcome: AnalysisOutcome) -> &'static str {
    match (language, outcome) {
        (Language::Ru, AnalysisOutcome::EmptyFallback) => "Не удалось сгенерировать анализ.",
        (Language::Kk, AnalysisOutcome::EmptyFallback) => "Талдау жасау мүмкін болмады.",
        (Language::Ru, AnalysisOutcome::TimeoutFallback) => {
            "ИИ психолог не ответил вовремя. Попробуйте пройти тест ещё раз позже."
        }
        (Language::Kk, AnalysisOutcome::TimeoutFallback) => {
            "ИИ психолог уақытында жауап бермеді. Кейінірек қайталап көріңіз."
        }
        (Language::Ru, AnalysisOutcome::ErrorFallback | AnalysisOutcome::Generated) => {
            "Произошла ошибка при соединении с ИИ психологом."
        }
        (Language::Kk, AnalysisOutcome::ErrorFallback | AnalysisOutcome::Generated) => {
            "Психологпен байланыс орнатуда қате шықты."
        }
    }
}

/// Reads `FLAGS_AI_TIMEOUT_SECS`.
#[must_use]
pub fn timeout_from_env() -> Option<Duration> {
    parse_timeout(std::env::var("FLAGS_AI_TIMEOUT_SECS").ok().as_deref())
}

/// `0` disables the timeout; unset or unparsable values use the default.
fn parse_timeout(raw: Option<&str>) -> Option<Duration> {
    match raw.map(str::trim).and_then(|v| v.parse::<u64>().ok()) {
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
        None => Some(DEFAULT_TIMEOUT),
    }
}

#[derive(Clone)]
pub struct Analyzer {
    generator: Arc<dyn TextGenerator>,
    timeout: Option<Duration>,
}

impl Analyzer {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// `None` waits for the generator indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Analyze a completed quiz. Always resolves; failures become fallback text.
    pub async fn analyze(&self, profile: &UserProfile, answers: &[Answer]) -> Analysis {
        let language = profile.language();
        let prompt = prompt::build_prompt(profile, answers);
        tracing::debug!(
            model = self.generator.model(),
            language = language.code(),
            answers = answers.len(),
            "requesting analysis"
        );

        let request = self.generator.generate(&prompt);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .unwrap_or(Err(GenerationError::Timeout)),
            None => request.await,
        };

        match result {
            Ok(text) if !text.trim().is_empty() => Analysis {
                text,
                outcome: AnalysisOutcome::Generated,
            },
            Ok(_) | Err(GenerationError::EmptyResponse) => {
                tracing::warn!("analysis came back empty; using fallback");
                Analysis::fallback(language, AnalysisOutcome::EmptyFallback)
            }
            Err(GenerationError::Timeout) => {
                tracing::warn!(timeout = ?self.timeout, "analysis timed out; using fallback");
                Analysis::fallback(language, AnalysisOutcome::TimeoutFallback)
            }
            Err(err) => {
                tracing::warn!(error = %err, "analysis request failed; using fallback");
                Analysis::fallback(language, AnalysisOutcome::ErrorFallback)
            }
        }
    }
}
