use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum number of characters a phone number needs before a profile can be submitted.
pub const MIN_PHONE_LEN: usize = 5;
/// Youngest age accepted at onboarding.
pub const MIN_AGE: u32 = 16;
/// Oldest age accepted at onboarding.
pub const MAX_AGE: u32 = 99;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("phone must have at least {min} characters, got {len}")]
    PhoneTooShort { min: usize, len: usize },

    #[error("age is required")]
    MissingAge,

    #[error("age {age} is outside {min}..={max}")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    #[error("region is required")]
    MissingRegion,

    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("invalid persisted profile: {0}")]
    InvalidPersistedState(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ProfileError::UnknownGender(s.to_string())),
        }
    }
}

/// The two supported locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    Kk,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ru, Language::Kk];

    /// Storage and prompt code (`ru` / `kk`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Kk => "kk",
        }
    }

    /// Label shown on the language switcher.
    #[must_use]
    pub fn switcher_label(self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::Kk => "KZ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Language::Ru),
            // The switcher shows "KZ"; accept it as an alias.
            "kk" | "kz" => Ok(Language::Kk),
            _ => Err(ProfileError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Respondent profile captured at onboarding. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    phone: String,
    age: u32,
    gender: Gender,
    region: String,
    language: Language,
}

impl UserProfile {
    /// Rehydrate a profile from persisted storage.
    ///
    /// Persisted profiles are only checked for structural sanity; the onboarding
    /// rules in [`ProfileDraft::validate`] may have changed since they were written.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidPersistedState` for a zero age or blank phone.
    pub fn from_persisted(
        phone: impl Into<String>,
        age: u32,
        gender: Gender,
        region: impl Into<String>,
        language: Language,
    ) -> Result<Self, ProfileError> {
        let phone = phone.into();
        if phone.trim().is_empty() {
            return Err(ProfileError::InvalidPersistedState("blank phone".into()));
        }
        if age == 0 {
            return Err(ProfileError::InvalidPersistedState("zero age".into()));
        }
        Ok(Self {
            phone,
            age,
            gender,
            region: region.into(),
            language,
        })
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}

/// Onboarding form state before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub phone: String,
    pub age: Option<u32>,
    pub gender: Gender,
    pub region: String,
    pub language: Language,
}

impl ProfileDraft {
    /// Empty form for `language`, preselecting the first region of that language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            phone: String::new(),
            age: None,
            gender: Gender::Female,
            region: crate::catalog::default_region(language).to_string(),
            language,
        }
    }

    /// Switch the form language, resetting the region to that language's default.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            self.language = language;
            self.region = crate::catalog::default_region(language).to_string();
        }
    }

    /// Whether the submit action should be enabled.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate the form into an immutable profile.
    ///
    /// # Errors
    ///
    /// Returns the first failing `ProfileError` rule.
    pub fn validate(&self) -> Result<UserProfile, ProfileError> {
        let phone = self.phone.trim();
        let len = phone.chars().count();
        if len < MIN_PHONE_LEN {
            return Err(ProfileError::PhoneTooShort {
                min: MIN_PHONE_LEN,
                len,
            });
        }
        let age = self.age.ok_or(ProfileError::MissingAge)?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ProfileError::AgeOutOfRange {
                age,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }
        let region = self.region.trim();
        if region.is_empty() {
            return Err(ProfileError::MissingRegion);
        }

        Ok(UserProfile {
            phone: phone.to_string(),
            age,
            gender: self.gender,
            region: region.to_string(),
            language: self.language,
        })
    }
}
