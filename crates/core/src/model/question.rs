use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// Decorative scene shown next to a question. Has no effect on scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    Phone,
    Restaurant,
    Gift,
    Listening,
    Money,
    Family,
    Control,
    Ex,
    Growth,
    Time,
}

impl Animation {
    /// Stable code, used as a CSS modifier by the presentation layer.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Animation::Phone => "phone",
            Animation::Restaurant => "restaurant",
            Animation::Gift => "gift",
            Animation::Listening => "listening",
            Animation::Money => "money",
            Animation::Family => "family",
            Animation::Control => "control",
            Animation::Ex => "ex",
            Animation::Growth => "growth",
            Animation::Time => "time",
        }
    }

    /// Emoji used as the scene glyph.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Animation::Phone => "📱",
            Animation::Restaurant => "🍽️",
            Animation::Gift => "🎁",
            Animation::Listening => "👂",
            Animation::Money => "💸",
            Animation::Family => "👨‍👩‍👧",
            Animation::Control => "🔒",
            Animation::Ex => "💔",
            Animation::Growth => "🌱",
            Animation::Time => "⏰",
        }
    }
}

/// A static, localized scenario question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: &'static str,
    context: &'static str,
    animation: Animation,
}

impl Question {
    #[must_use]
    pub const fn new(
        id: u32,
        text: &'static str,
        context: &'static str,
        animation: Animation,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            text,
            context,
            animation,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn context(&self) -> &'static str {
        self.context
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation
    }
}
