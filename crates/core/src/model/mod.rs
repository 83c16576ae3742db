mod answer;
mod ids;
mod profile;
mod question;
mod session;

pub use ids::{ParseIdError, QuestionId, SessionId};

pub use answer::{Answer, Flag, FlagTally};
pub use profile::{
    Gender, Language, MAX_AGE, MIN_AGE, MIN_PHONE_LEN, ProfileDraft, ProfileError, UserProfile,
};
pub use question::{Animation, Question};
pub use session::GameSession;
