//! Persisted JSON shape of the session list.
//!
//! Field names follow the layout the store has always used (camelCase,
//! epoch-millisecond timestamps) so existing data stays readable.

use flags_core::model::{
    Answer, Flag, GameSession, Gender, Language, QuestionId, SessionId, UserProfile,
};
use flags_core::time::from_millis;
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// Entry name under which the whole session list is stored.
pub const SESSIONS_KEY: &str = "rfgf_sessions_v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub phone: String,
    pub age: u32,
    pub gender: Gender,
    pub region: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub question_text: String,
    pub choice: Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: SessionId,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub profile: ProfileRecord,
    pub answers: Vec<AnswerRecord>,
    pub analysis: String,
}

impl SessionRecord {
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let profile = session.profile();
        Self {
            id: session.id().clone(),
            timestamp: session.timestamp().timestamp_millis(),
            profile: ProfileRecord {
                phone: profile.phone().to_owned(),
                age: profile.age(),
                gender: profile.gender(),
                region: profile.region().to_owned(),
                language: profile.language(),
            },
            answers: session
                .answers()
                .iter()
                .map(|a| AnswerRecord {
                    question_id: a.question_id,
                    question_text: a.question_text.clone(),
                    choice: a.choice,
                })
                .collect(),
            analysis: session.analysis().to_owned(),
        }
    }

    /// Convert the record back into a domain `GameSession`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the timestamp or profile is invalid.
    pub fn into_session(self) -> Result<GameSession, StorageError> {
        let timestamp = from_millis(self.timestamp).ok_or_else(|| {
            StorageError::Serialization(format!("invalid timestamp: {}", self.timestamp))
        })?;
        let profile = UserProfile::from_persisted(
            self.profile.phone,
            self.profile.age,
            self.profile.gender,
            self.profile.region,
            self.profile.language,
        )
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let answers = self
            .answers
            .into_iter()
            .map(|a| Answer::new(a.question_id, a.question_text, a.choice))
            .collect();

        Ok(GameSession::new(
            self.id,
            timestamp,
            profile,
            answers,
            self.analysis,
        ))
    }
}

/// Serialize the full session list, preserving order.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_sessions(sessions: &[GameSession]) -> Result<String, StorageError> {
    let records: Vec<SessionRecord> = sessions.iter().map(SessionRecord::from_session).collect();
    serde_json::to_string(&records).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse a stored session list.
///
/// A document that is not a JSON list fails as a whole. Entries that do not
/// match the record layout or violate domain rules are skipped individually.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the document cannot be parsed.
pub fn decode_sessions(raw: &str) -> Result<Vec<GameSession>, StorageError> {
    let entries = parse_entries(raw)?;

    let mut out = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let decoded = serde_json::from_value::<SessionRecord>(entry)
            .map_err(|e| StorageError::Serialization(e.to_string()))
            .and_then(SessionRecord::into_session);
        match decoded {
            Ok(session) => out.push(session),
            Err(err) => tracing::warn!(index, error = %err, "skipping unreadable stored session"),
        }
    }
    Ok(out)
}

/// Put `session` in front of the stored list, keeping every existing entry
/// verbatim, including ones `decode_sessions` would skip.
///
/// Returns the new document and its entry count.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if `existing` is not a JSON list or
/// encoding fails.
pub fn prepend_session(
    existing: Option<&str>,
    session: &GameSession,
) -> Result<(String, usize), StorageError> {
    let mut entries = match existing {
        Some(raw) => parse_entries(raw)?,
        None => Vec::new(),
    };
    let record = serde_json::to_value(SessionRecord::from_session(session))
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    entries.insert(0, record);

    let raw = serde_json::to_string(&entries)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    Ok((raw, entries.len()))
}

fn parse_entries(raw: &str) -> Result<Vec<serde_json::Value>, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flags_core::time::fixed_now;

    fn session() -> GameSession {
        let profile =
            UserProfile::from_persisted("+77011234567", 25, Gender::Female, "Алматы", Language::Ru)
                .unwrap();
        let answers = vec![
            Answer::new(QuestionId::new(1), "Первый \"вопрос\"", Flag::Red),
            Answer::new(QuestionId::new(2), "Второй", Flag::Green),
        ];
        GameSession::new(
            SessionId::generate(fixed_now()),
            fixed_now(),
            profile,
            answers,
            "## Портрет\n\nТекст, с запятой",
        )
    }

    #[test]
    fn encoded_list_reads_back_identically() {
        let sessions = vec![session(), session()];
        let raw = encode_sessions(&sessions).unwrap();
        let decoded = decode_sessions(&raw).unwrap();
        assert_eq!(decoded, sessions);
    }

    #[test]
    fn record_uses_camel_case_layout() {
        let raw = encode_sessions(&[session()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value[0];
        assert_eq!(first["timestamp"], serde_json::json!(1_700_000_000_000_i64));
        assert_eq!(first["profile"]["gender"], "female");
        assert_eq!(first["profile"]["language"], "ru");
        assert_eq!(first["answers"][0]["questionId"], 1);
        assert_eq!(first["answers"][0]["choice"], "RED");
        assert!(first["answers"][0]["questionText"].is_string());
    }

    #[test]
    fn reads_legacy_document() {
        let raw = r#"[{"id":"lp0x1abc","timestamp":1700000000000,
            "profile":{"phone":"+77011234567","age":30,"gender":"male","region":"Астана","language":"kk"},
            "answers":[{"questionId":3,"questionText":"Q","choice":"GREEN"}],
            "analysis":"ok"}]"#;
        let decoded = decode_sessions(raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].profile().language(), Language::Kk);
        assert_eq!(decoded[0].green_count(), 1);
    }

    #[test]
    fn invalid_record_is_dropped_but_others_survive() {
        let raw = r#"[
            {"id":"bad1","timestamp":1700000000000,
             "profile":{"phone":"+7701","age":0,"gender":"male","region":"X","language":"ru"},
             "answers":[],"analysis":""},
            {"id":"good1","timestamp":1700000000000,
             "profile":{"phone":"+7701","age":20,"gender":"other","region":"X","language":"ru"},
             "answers":[],"analysis":""}
        ]"#;
        let decoded = decode_sessions(raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id().as_str(), "good1");
    }

    #[test]
    fn malformed_entry_does_not_hide_the_rest() {
        let raw = r#"[
            {"id":"not-base36!","timestamp":1700000000000,
             "profile":{"phone":"+77011234567","age":20,"gender":"male","region":"X","language":"ru"},
             "answers":[],"analysis":""},
            {"id":"x2","timestamp":1700000000000,
             "profile":{"phone":"+77011234567","age":20,"gender":"robot","region":"X","language":"ru"},
             "answers":[],"analysis":""},
            {"id":"good1","timestamp":1700000000000,
             "profile":{"phone":"+77011234567","age":20,"gender":"other","region":"X","language":"ru"},
             "answers":[],"analysis":""}
        ]"#;
        let decoded = decode_sessions(raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id().as_str(), "good1");
    }

    #[test]
    fn prepend_keeps_entries_that_do_not_decode() {
        let raw = r#"[{"id":"old1","timestamp":1700000000000,
            "profile":{"phone":"+77011234567","age":0,"gender":"male","region":"X","language":"ru"},
            "answers":[],"analysis":"","legacyField":true}]"#;
        let fresh = session();

        let (updated, total) = prepend_session(Some(raw), &fresh).unwrap();
        assert_eq!(total, 2);
        assert!(updated.contains("old1"));
        assert!(updated.contains("legacyField"));

        let decoded = decode_sessions(&updated).unwrap();
        assert_eq!(decoded, vec![fresh]);
    }

    #[test]
    fn prepend_refuses_a_document_that_is_not_a_list() {
        assert!(prepend_session(Some("{not json"), &session()).is_err());
        let (raw, total) = prepend_session(None, &session()).unwrap();
        assert_eq!(total, 1);
        assert_eq!(decode_sessions(&raw).unwrap().len(), 1);
    }

    #[test]
    fn garbage_document_is_an_error() {
        assert!(decode_sessions("{not json").is_err());
        assert!(decode_sessions("{\"a\":1}").is_err());
    }
}
