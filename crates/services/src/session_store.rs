use std::sync::Arc;

use flags_core::Clock;
use flags_core::model::{Answer, GameSession, SessionId, UserProfile};
use flags_core::time::from_millis;
use storage::records::{SESSIONS_KEY, decode_sessions, prepend_session};
use storage::repository::KeyValueStore;

use crate::error::SessionStoreError;
use crate::export::{SessionExport, format_timestamp, render_table};

/// Proof that the user confirmed a destructive clear.
///
/// Only the confirmation dialog (or `clear --yes`) should build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearConfirmation(());

impl ClearConfirmation {
    #[must_use]
    pub fn confirmed() -> Self {
        Self(())
    }
}

/// Newest-first record of completed sessions kept under a single storage entry.
///
/// Every write is a full read-modify-write of the list; a single writer is assumed.
#[derive(Clone)]
pub struct SessionStore {
    clock: Clock,
    entries: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(clock: Clock, entries: Arc<dyn KeyValueStore>) -> Self {
        Self { clock, entries }
    }

    /// Record a completed session at the front of the list.
    ///
    /// Existing entries are kept as stored, even ones `list_all` cannot show.
    /// Only an entry that is not a list at all is replaced.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Storage` if the backend cannot be read or written.
    pub async fn append(
        &self,
        profile: UserProfile,
        answers: Vec<Answer>,
        analysis: impl Into<String>,
    ) -> Result<GameSession, SessionStoreError> {
        // Stored timestamps have millisecond precision.
        let now = from_millis(self.clock.now_millis()).unwrap_or_else(|| self.clock.now());
        let session = GameSession::new(SessionId::generate(now), now, profile, answers, analysis);

        let existing = self.entries.get(SESSIONS_KEY).await?;
        let (raw, total) = match prepend_session(existing.as_deref(), &session) {
            Ok(updated) => updated,
            Err(err) => {
                tracing::warn!(error = %err, "stored sessions unreadable; starting a new list");
                prepend_session(None, &session)?
            }
        };
        self.entries.put(SESSIONS_KEY, &raw).await?;
        tracing::info!(
            session_id = %session.id(),
            total,
            red = session.red_count(),
            green = session.green_count(),
            "session saved"
        );
        Ok(session)
    }

    /// All stored sessions, newest first. Read failures degrade to an empty list.
    pub async fn list_all(&self) -> Vec<GameSession> {
        let raw = match self.entries.get(SESSIONS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored sessions");
                return Vec::new();
            }
        };

        match decode_sessions(&raw) {
            Ok(sessions) => {
                tracing::debug!(count = sessions.len(), "loaded stored sessions");
                sessions
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to parse stored sessions");
                Vec::new()
            }
        }
    }

    /// Stored sessions whose phone, region, or formatted date contains `query`,
    /// ignoring case. A blank query returns everything.
    pub async fn filter(&self, query: &str) -> Vec<GameSession> {
        filter_sessions(self.list_all().await, query)
    }

    /// Delete every stored session.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Storage` if the backend cannot be written.
    pub async fn clear_all(&self, _confirmed: ClearConfirmation) -> Result<(), SessionStoreError> {
        self.entries.remove(SESSIONS_KEY).await?;
        tracing::info!("cleared all stored sessions");
        Ok(())
    }

    /// Render every stored session as CSV. `None` when there is nothing to export.
    pub async fn export_to_table(&self) -> Option<SessionExport> {
        let sessions = self.list_all().await;
        let export = render_table(&sessions, self.clock.now());
        if export.is_none() {
            tracing::info!("export skipped: no stored sessions");
        }
        export
    }
}

/// Keep the sessions matching `query` (phone, region, or formatted date,
/// case-insensitive), preserving order. A blank query keeps everything.
#[must_use]
pub fn filter_sessions(sessions: Vec<GameSession>, query: &str) -> Vec<GameSession> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return sessions;
    }
    sessions
        .into_iter()
        .filter(|session| matches_query(session, &query))
        .collect()
}

/// `query` must already be lowercased.
fn matches_query(session: &GameSession, query: &str) -> bool {
    let profile = session.profile();
    profile.phone().to_lowercase().contains(query)
        || profile.region().to_lowercase().contains(query)
        || format_timestamp(session.timestamp()).contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flags_core::model::{Flag, Gender, Language, QuestionId};
    use flags_core::time::{fixed_clock, fixed_now};
    use storage::repository::{InMemoryStore, StorageError};

    fn profile(phone: &str, region: &str) -> UserProfile {
        UserProfile::from_persisted(phone, 30, Gender::Male, region, Language::Ru).unwrap()
    }

    fn answers() -> Vec<Answer> {
        vec![
            Answer::new(QuestionId::new(1), "Один", Flag::Red),
            Answer::new(QuestionId::new(2), "Два", Flag::Green),
            Answer::new(QuestionId::new(3), "Три", Flag::Green),
        ]
    }

    fn store() -> (SessionStore, Arc<InMemoryStore>) {
        let backend = Arc::new(InMemoryStore::new());
        let entries: Arc<dyn KeyValueStore> = backend.clone();
        (SessionStore::new(fixed_clock(), entries), backend)
    }

    struct BrokenStore;

    #[async_trait::async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
        async fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
    }

    #[tokio::test]
    async fn append_puts_newest_first() {
        let (store, _) = store();
        let first = store
            .append(profile("+77010000001", "Алматы"), answers(), "a")
            .await
            .unwrap();
        let second = store
            .append(profile("+77010000002", "Астана"), answers(), "b")
            .await
            .unwrap();

        let listed = store.list_all().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], second);
        assert_eq!(listed[1], first);
        assert_ne!(first.id(), second.id());
        assert_eq!(second.timestamp(), fixed_now());
    }

    #[tokio::test]
    async fn stored_session_reads_back_identically() {
        let (store, _) = store();
        let saved = store
            .append(profile("+77010000001", "Алматы"), answers(), "## Анализ\n\n\"текст\"")
            .await
            .unwrap();
        let listed = store.list_all().await;
        assert_eq!(listed[0].profile(), saved.profile());
        assert_eq!(listed[0].answers(), saved.answers());
        assert_eq!(listed[0].analysis(), saved.analysis());
    }

    #[tokio::test]
    async fn clear_then_list_is_empty() {
        let (store, _) = store();
        store.clear_all(ClearConfirmation::confirmed()).await.unwrap();
        assert!(store.list_all().await.is_empty());

        for _ in 0..3 {
            store
                .append(profile("+77010000001", "Алматы"), answers(), "a")
                .await
                .unwrap();
        }
        store.clear_all(ClearConfirmation::confirmed()).await.unwrap();
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_entry_lists_empty_and_is_replaced_on_append() {
        let (store, backend) = store();
        backend.put(SESSIONS_KEY, "{definitely not json").await.unwrap();
        assert!(store.list_all().await.is_empty());

        store
            .append(profile("+77010000001", "Алматы"), answers(), "a")
            .await
            .unwrap();
        assert_eq!(store.list_all().await.len(), 1);
    }

    #[tokio::test]
    async fn backend_failure_degrades_reads_but_fails_writes() {
        let store = SessionStore::new(fixed_clock(), Arc::new(BrokenStore));
        assert!(store.list_all().await.is_empty());
        assert!(store.export_to_table().await.is_none());
        let err = store
            .append(profile("+77010000001", "Алматы"), answers(), "a")
            .await
            .unwrap_err();
        assert!(matches!(err, SessionStoreError::Storage(_)));
    }

    #[tokio::test]
    async fn appended_session_equals_first_listed_with_system_clock() {
        let entries: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
        let store = SessionStore::new(Clock::default_clock(), entries);
        let saved = store
            .append(profile("+77010000001", "Алматы"), answers(), "a")
            .await
            .unwrap();

        assert_eq!(saved.timestamp().timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(store.list_all().await[0], saved);
    }

    #[tokio::test]
    async fn append_keeps_entries_that_cannot_be_listed() {
        let (store, backend) = store();
        let legacy = r#"[
            {"id":"old1","timestamp":1700000000000,
             "profile":{"phone":"+77010000009","age":0,"gender":"male","region":"X","language":"ru"},
             "answers":[],"analysis":""},
            {"id":"old-2","timestamp":1700000000000,
             "profile":{"phone":"+77010000008","age":40,"gender":"male","region":"X","language":"ru"},
             "answers":[],"analysis":""},
            {"id":"old3","timestamp":1700000000000,
             "profile":{"phone":"+77010000007","age":40,"gender":"male","region":"X","language":"ru"},
             "answers":[],"analysis":""}
        ]"#;
        backend.put(SESSIONS_KEY, legacy).await.unwrap();
        assert_eq!(store.list_all().await.len(), 1);

        let saved = store
            .append(profile("+77010000001", "Алматы"), answers(), "a")
            .await
            .unwrap();

        let raw = backend.get(SESSIONS_KEY).await.unwrap().unwrap();
        assert!(raw.contains("old1"), "{raw}");
        assert!(raw.contains("old-2"), "{raw}");
        let listed = store.list_all().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], saved);
        assert_eq!(listed[1].id().as_str(), "old3");
    }

    #[test]
    fn filter_sessions_keeps_order_of_matches() {
        let sessions: Vec<GameSession> = ["+77010000001", "+77029999999", "+77010000003"]
            .iter()
            .map(|phone| {
                GameSession::new(
                    SessionId::generate(fixed_now()),
                    fixed_now(),
                    profile(phone, "Алматы"),
                    answers(),
                    "",
                )
            })
            .collect();

        let matched = filter_sessions(sessions.clone(), "7701");
        assert_eq!(matched, vec![sessions[0].clone(), sessions[2].clone()]);
        assert_eq!(filter_sessions(sessions.clone(), "   ").len(), 3);
    }

    #[tokio::test]
    async fn filter_matches_phone_region_or_date() {
        let (store, _) = store();
        store
            .append(profile("+77010000001", "Алматы"), answers(), "a")
            .await
            .unwrap();
        store
            .append(profile("+77029999999", "Астана"), answers(), "b")
            .await
            .unwrap();

        assert_eq!(store.filter("").await.len(), 2);
        assert_eq!(store.filter("9999").await.len(), 1);
        assert_eq!(store.filter("  алматы ").await.len(), 1);
        assert_eq!(store.filter("АСТАНА").await.len(), 1);
        assert_eq!(store.filter("14.11.2023").await.len(), 2);
        assert!(store.filter("Караганда").await.is_empty());
    }

    #[tokio::test]
    async fn export_has_one_row_per_session_with_counts() {
        let (store, _) = store();
        assert!(store.export_to_table().await.is_none());

        store
            .append(profile("+77010000001", "Алматы"), answers(), "a")
            .await
            .unwrap();
        store
            .append(profile("+77010000002", "Астана"), answers(), "b")
            .await
            .unwrap();

        let export = store.export_to_table().await.unwrap();
        assert_eq!(export.rows(), 2);
        let text = std::str::from_utf8(export.bytes()).unwrap();
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert!(row.contains(",ru,1,2,"), "{row}");
        }
    }
}
