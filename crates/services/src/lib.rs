#![forbid(unsafe_code)]

pub mod analyzer;
pub mod app_services;
pub mod completion;
pub mod error;
pub mod export;
pub mod quiz_loop;
pub mod session_store;

pub use flags_core::Clock;

pub use analyzer::{Analysis, AnalysisOutcome, Analyzer, HttpTextGenerator, TextGenerator};
pub use app_services::{AppServices, ServicesConfig};
pub use completion::{CompletedSession, CompletionService};
pub use error::{AppServicesError, ExportError, GenerationError, SessionStoreError};
pub use export::SessionExport;
pub use quiz_loop::QuizLoop;
pub use session_store::{ClearConfirmation, SessionStore};
