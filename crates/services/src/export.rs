//! Spreadsheet-friendly CSV rendering of stored sessions.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use flags_core::model::GameSession;

use crate::error::ExportError;

/// Byte-order mark prepended so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

pub const EXPORT_FILE_PREFIX: &str = "redflag_data_";

pub const EXPORT_HEADERS: [&str; 10] = [
    "ID",
    "Дата",
    "Телефон",
    "Возраст",
    "Пол",
    "Регион",
    "Язык",
    "Красные флаги",
    "Зеленые флаги",
    "Анализ",
];

/// A rendered export, ready to be written or offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExport {
    file_name: String,
    bytes: Vec<u8>,
    rows: usize,
}

impl SessionExport {
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File contents, BOM included.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of data rows (header excluded).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Write the export into `dir` under its file name, replacing any file of the same name.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the directory cannot be created or the file written.
    pub async fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| io_error(dir, source))?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes)
            .await
            .map_err(|source| io_error(&path, source))?;
        tracing::info!(path = %path.display(), rows = self.rows, "wrote session export");
        Ok(path)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Render `sessions` as one CSV row each, newest first as given.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn render_table(sessions: &[GameSession], today: DateTime<Utc>) -> Option<SessionExport> {
    if sessions.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(sessions.len() + 1);
    lines.push(EXPORT_HEADERS.join(","));
    lines.extend(sessions.iter().map(render_row));

    let mut text = String::from(UTF8_BOM);
    text.push_str(&lines.join("\n"));

    Some(SessionExport {
        file_name: export_file_name(today),
        bytes: text.into_bytes(),
        rows: sessions.len(),
    })
}

#[must_use]
pub fn export_file_name(today: DateTime<Utc>) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.csv", today.format("%Y-%m-%d"))
}

/// `dd.mm.yyyy, HH:MM:SS` in UTC.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%d.%m.%Y, %H:%M:%S").to_string()
}

fn render_row(session: &GameSession) -> String {
    let profile = session.profile();
    let tally = session.tally();
    [
        escape_if_needed(session.id().as_str()),
        quote(&format_timestamp(session.timestamp())),
        quote(profile.phone()),
        profile.age().to_string(),
        profile.gender().code().to_owned(),
        quote(profile.region()),
        profile.language().code().to_owned(),
        tally.red.to_string(),
        tally.green.to_string(),
        quote(session.analysis()),
    ]
    .join(",")
}

/// Always-quoted field: quotes doubled, line breaks flattened to spaces.
fn quote(field: &str) -> String {
    let flat = field.replace("\r\n", " ").replace(['\n', '\r'], " ");
    format!("\"{}\"", flat.replace('"', "\"\""))
}

fn escape_if_needed(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quote(field)
    } else {
        field.to_owned()
    }
}
