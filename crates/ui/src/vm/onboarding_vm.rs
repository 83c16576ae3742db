use flags_core::catalog::regions;
use flags_core::model::{Gender, Language, ProfileDraft, ProfileError, UserProfile};

/// Onboarding form state, including the raw age text as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnboardingVm {
    draft: ProfileDraft,
    age_input: String,
}

impl OnboardingVm {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            draft: ProfileDraft::new(language),
            age_input: String::new(),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.draft.language
    }

    /// Switching language resets the region to the new language's default.
    pub fn set_language(&mut self, language: Language) {
        self.draft.set_language(language);
    }

    pub fn set_phone(&mut self, phone: String) {
        self.draft.phone = phone;
    }

    #[must_use]
    pub fn age_input(&self) -> &str {
        &self.age_input
    }

    pub fn set_age_input(&mut self, raw: String) {
        self.draft.age = raw.trim().parse::<u32>().ok();
        self.age_input = raw;
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }

    pub fn set_region(&mut self, region: String) {
        self.draft.region = region;
    }

    #[must_use]
    pub fn region_options(&self) -> &'static [&'static str] {
        regions(self.draft.language)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.draft.is_submittable()
    }

    /// # Errors
    ///
    /// Returns the first failing `ProfileError` rule.
    pub fn submit(&self) -> Result<UserProfile, ProfileError> {
        self.draft.validate()
    }
}
