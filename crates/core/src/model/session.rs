use chrono::{DateTime, Utc};

use crate::model::answer::{Answer, FlagTally};
use crate::model::ids::SessionId;
use crate::model::profile::UserProfile;

/// One completed run of the quiz, as kept in the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    id: SessionId,
    timestamp: DateTime<Utc>,
    profile: UserProfile,
    answers: Vec<Answer>,
    analysis: String,
}

impl GameSession {
    #[must_use]
    pub fn new(
        id: SessionId,
        timestamp: DateTime<Utc>,
        profile: UserProfile,
        answers: Vec<Answer>,
        analysis: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            profile,
            answers,
            analysis: analysis.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn analysis(&self) -> &str {
        &self.analysis
    }

    #[must_use]
    pub fn tally(&self) -> FlagTally {
        FlagTally::from_answers(&self.answers)
    }

    #[must_use]
    pub fn red_count(&self) -> u32 {
        self.tally().red
    }

    #[must_use]
    pub fn green_count(&self) -> u32 {
        self.tally().green
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Flag, Gender, Language, QuestionId};
    use crate::time::fixed_now;

    #[test]
    fn session_counts_flags_from_answers() {
        let profile =
            UserProfile::from_persisted("+77011234567", 25, Gender::Female, "Almaty", Language::Ru)
                .unwrap();
        let answers = (1..=4)
            .map(|id| {
                let choice = if id % 3 == 0 { Flag::Green } else { Flag::Red };
                Answer::new(QuestionId::new(id), format!("Q{id}"), choice)
            })
            .collect();
        let session = GameSession::new(
            SessionId::generate(fixed_now()),
            fixed_now(),
            profile,
            answers,
            "analysis",
        );

        assert_eq!(session.red_count(), 3);
        assert_eq!(session.green_count(), 1);
        assert_eq!(session.analysis(), "analysis");
    }
}
