//! Structured messages produced by the rules.
//!
//! The core never formats colors or escape codes. Every line carries a
//! semantic [`Tone`] and the frontend decides how to render it.

use std::fmt;

/// Semantic presentation tag attached to messages and effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Tone {
    /// Plain narration.
    #[default]
    Neutral,
    /// Status and informational lines.
    Info,
    /// Rewards, healing, victory.
    Success,
    /// Soft warnings (empty satchel, frozen enemy).
    Warning,
    /// Damage, failure, defeat.
    Alert,
    /// Skills, skill stones, chaos.
    Mystic,
    /// Defensive buffs.
    Ward,
    /// Extreme outcomes (Corrupted Surge).
    Critical,
}

/// A single line of narrative or status output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub tone: Tone,
    pub text: String,
}

impl Message {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(Tone::Neutral, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Tone::Warning, text)
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self::new(Tone::Alert, text)
    }

    pub fn mystic(text: impl Into<String>) -> Self {
        Self::new(Tone::Mystic, text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Cosmetic pause points between round phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pacing {
    /// Before the enemy swings.
    EnemyWindup,
    /// After both sides have acted.
    RoundEnd,
    /// After an outcome message the reader should not miss.
    Beat,
}
