//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `TextGenerator`.
///
/// These never leave the analyzer; they select which fallback text is shown.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("text generation is not configured")]
    Disabled,
    #[error("text generation returned an empty response")]
    EmptyResponse,
    #[error("text generation timed out")]
    Timeout,
    #[error("text generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `SessionStore` writes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while writing an export file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("failed to write export to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
