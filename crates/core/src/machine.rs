//! Top-level view coordinator: onboarding → quiz → analyzing → results, plus the admin overlay.

use std::fmt;
use thiserror::Error;

use crate::model::{Answer, Language, UserProfile};

/// Closed set of application states. Data owned by a state lives inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Onboarding,
    Quiz {
        profile: UserProfile,
    },
    Analyzing {
        profile: UserProfile,
        answers: Vec<Answer>,
    },
    Results {
        profile: UserProfile,
        answers: Vec<Answer>,
        analysis: String,
    },
    Admin {
        return_to: Box<AppState>,
    },
}

/// Payload-free discriminant of [`AppState`], for logging and matching in views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Onboarding,
    Quiz,
    Analyzing,
    Results,
    Admin,
}

impl AppState {
    #[must_use]
    pub fn kind(&self) -> StateKind {
        match self {
            AppState::Onboarding => StateKind::Onboarding,
            AppState::Quiz { .. } => StateKind::Quiz,
            AppState::Analyzing { .. } => StateKind::Analyzing,
            AppState::Results { .. } => StateKind::Results,
            AppState::Admin { .. } => StateKind::Admin,
        }
    }

    /// Profile of the live session, if one has been submitted.
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            AppState::Quiz { profile }
            | AppState::Analyzing { profile, .. }
            | AppState::Results { profile, .. } => Some(profile),
            AppState::Onboarding => None,
            AppState::Admin { return_to } => return_to.profile(),
        }
    }
}

/// User-initiated or async-resolution events fed to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ProfileSubmitted(UserProfile),
    QuizCompleted(Vec<Answer>),
    AnalysisResolved(String),
    Restart,
    OpenAdmin,
    CloseAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ProfileSubmitted,
    QuizCompleted,
    AnalysisResolved,
    Restart,
    OpenAdmin,
    CloseAdmin,
}

impl AppEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::ProfileSubmitted(_) => EventKind::ProfileSubmitted,
            AppEvent::QuizCompleted(_) => EventKind::QuizCompleted,
            AppEvent::AnalysisResolved(_) => EventKind::AnalysisResolved,
            AppEvent::Restart => EventKind::Restart,
            AppEvent::OpenAdmin => EventKind::OpenAdmin,
            AppEvent::CloseAdmin => EventKind::CloseAdmin,
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("{event} is not valid in state {state}")]
    Invalid { state: StateKind, event: EventKind },

    #[error("language can only change during onboarding (state {state})")]
    LanguageLocked { state: StateKind },
}

/// Explicit finite-state machine over [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMachine {
    state: AppState,
    language: Language,
}

impl Default for AppMachine {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl AppMachine {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            state: AppState::Onboarding,
            language,
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Language the interface is currently rendered in.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// # Errors
    ///
    /// Returns `TransitionError::LanguageLocked` outside onboarding.
    pub fn set_language(&mut self, language: Language) -> Result<(), TransitionError> {
        match self.state {
            AppState::Onboarding => {
                self.language = language;
                Ok(())
            }
            _ => Err(TransitionError::LanguageLocked {
                state: self.state.kind(),
            }),
        }
    }

    /// Profile and answers awaiting analysis, present only while analyzing.
    #[must_use]
    pub fn pending_analysis(&self) -> Option<(&UserProfile, &[Answer])> {
        match &self.state {
            AppState::Analyzing { profile, answers } => Some((profile, answers.as_slice())),
            _ => None,
        }
    }

    /// Apply `event`. On error the state is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::Invalid` for any pair outside the transition table.
    pub fn handle(&mut self, event: AppEvent) -> Result<&AppState, TransitionError> {
        let state = std::mem::replace(&mut self.state, AppState::Onboarding);
        match Self::transition(state, event) {
            Ok(next) => {
                if let AppState::Quiz { profile } = &next {
                    self.language = profile.language();
                }
                self.state = next;
                Ok(&self.state)
            }
            Err((previous, err)) => {
                self.state = previous;
                Err(err)
            }
        }
    }

    fn transition(
        state: AppState,
        event: AppEvent,
    ) -> Result<AppState, (AppState, TransitionError)> {
        match (state, event) {
            (AppState::Onboarding, AppEvent::ProfileSubmitted(profile)) => {
                Ok(AppState::Quiz { profile })
            }
            (AppState::Quiz { profile }, AppEvent::QuizCompleted(answers)) => {
                Ok(AppState::Analyzing { profile, answers })
            }
            (AppState::Analyzing { profile, answers }, AppEvent::AnalysisResolved(analysis)) => {
                Ok(AppState::Results {
                    profile,
                    answers,
                    analysis,
                })
            }
            (AppState::Results { .. }, AppEvent::Restart) => Ok(AppState::Onboarding),
            (state @ (AppState::Onboarding | AppState::Results { .. }), AppEvent::OpenAdmin) => {
                Ok(AppState::Admin {
                    return_to: Box::new(state),
                })
            }
            (AppState::Admin { return_to }, AppEvent::CloseAdmin) => Ok(*return_to),
            (state, event) => {
                let err = TransitionError::Invalid {
                    state: state.kind(),
                    event: event.kind(),
                };
                Err((state, err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Flag, Gender, QuestionId};

    fn profile() -> UserProfile {
        UserProfile::from_persisted("+77011234567", 25, Gender::Female, "Almaty", Language::Kk)
            .unwrap()
    }

    fn answers() -> Vec<Answer> {
        vec![Answer::new(QuestionId::new(1), "Q1", Flag::Red)]
    }

    #[test]
    fn happy_path_reaches_results_and_restarts() {
        let mut machine = AppMachine::new(Language::Ru);
        machine
            .handle(AppEvent::ProfileSubmitted(profile()))
            .unwrap();
        assert_eq!(machine.kind(), StateKind::Quiz);
        assert_eq!(machine.language(), Language::Kk);

        machine.handle(AppEvent::QuizCompleted(answers())).unwrap();
        let (pending_profile, pending_answers) = machine.pending_analysis().unwrap();
        assert_eq!(pending_profile, &profile());
        assert_eq!(pending_answers.len(), 1);

        let state = machine
            .handle(AppEvent::AnalysisResolved("text".into()))
            .unwrap();
        assert!(matches!(state, AppState::Results { analysis, .. } if analysis == "text"));

        machine.handle(AppEvent::Restart).unwrap();
        assert_eq!(machine.state(), &AppState::Onboarding);
        assert!(machine.state().profile().is_none());
    }

    #[test]
    fn admin_overlay_returns_to_remembered_state() {
        let mut machine = AppMachine::default();
        machine.handle(AppEvent::OpenAdmin).unwrap();
        assert_eq!(machine.kind(), StateKind::Admin);
        machine.handle(AppEvent::CloseAdmin).unwrap();
        assert_eq!(machine.kind(), StateKind::Onboarding);

        machine.handle(AppEvent::ProfileSubmitted(profile())).unwrap();
        machine.handle(AppEvent::QuizCompleted(answers())).unwrap();
        machine.handle(AppEvent::AnalysisResolved("a".into())).unwrap();
        let before = machine.state().clone();

        machine.handle(AppEvent::OpenAdmin).unwrap();
        assert_eq!(machine.state().profile(), Some(&profile()));
        machine.handle(AppEvent::CloseAdmin).unwrap();
        assert_eq!(machine.state(), &before);
    }

    #[test]
    fn invalid_events_leave_state_untouched() {
        let mut machine = AppMachine::default();
        let err = machine.handle(AppEvent::QuizCompleted(answers())).unwrap_err();
        assert_eq!(
            err,
            TransitionError::Invalid {
                state: StateKind::Onboarding,
                event: EventKind::QuizCompleted,
            }
        );
        assert_eq!(machine.state(), &AppState::Onboarding);

        machine.handle(AppEvent::ProfileSubmitted(profile())).unwrap();
        assert!(machine.handle(AppEvent::OpenAdmin).is_err());
        assert!(machine.handle(AppEvent::Restart).is_err());
        assert_eq!(machine.kind(), StateKind::Quiz);

        machine.handle(AppEvent::QuizCompleted(answers())).unwrap();
        assert!(machine.handle(AppEvent::OpenAdmin).is_err());
        assert!(machine.handle(AppEvent::QuizCompleted(answers())).is_err());
        assert_eq!(machine.kind(), StateKind::Analyzing);
    }

    #[test]
    fn admin_cannot_nest() {
        let mut machine = AppMachine::default();
        machine.handle(AppEvent::OpenAdmin).unwrap();
        assert!(machine.handle(AppEvent::OpenAdmin).is_err());
        assert!(machine.handle(AppEvent::ProfileSubmitted(profile())).is_err());
        assert_eq!(machine.kind(), StateKind::Admin);
    }

    #[test]
    fn language_only_changes_during_onboarding() {
        let mut machine = AppMachine::default();
        machine.set_language(Language::Kk).unwrap();
        assert_eq!(machine.language(), Language::Kk);

        machine.handle(AppEvent::OpenAdmin).unwrap();
        assert_eq!(
            machine.set_language(Language::Ru).unwrap_err(),
            TransitionError::LanguageLocked {
                state: StateKind::Admin
            }
        );
    }
}
