//! The eight wheel archetypes.

use crate::io::Tone;

/// One slot of the Wheel.
///
/// Order matches the weight table in [`super::Wheel::weights`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum WheelOutcome {
    Power,
    Guard,
    Speed,
    Time,
    Divine,
    Chaos,
    #[strum(serialize = "Fate Reversal")]
    Reversal,
    #[strum(serialize = "Corrupted Surge")]
    Surge,
}

impl WheelOutcome {
    pub const ALL: [Self; 8] = [
        Self::Power,
        Self::Guard,
        Self::Speed,
        Self::Time,
        Self::Divine,
        Self::Chaos,
        Self::Reversal,
        Self::Surge,
    ];

    pub const fn description(self) -> &'static str {
        match self {
            Self::Power => "+25 Attack for 3 Rounds",
            Self::Guard => "+20 Defense for 2 Rounds",
            Self::Speed => "+15 Speed for 3 Rounds",
            Self::Time => "Enemy freezes. Skip next 2 turns.",
            Self::Divine => "Heal 80 HP & 40 MP",
            Self::Chaos => "Chaos Force! (+40 ATK) | -30 HP",
            Self::Reversal => "Reflect 50% damage next turn",
            Self::Surge => "God-like ATK (+60) | HP Drain (4 turns)",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Power => Tone::Alert,
            Self::Guard => Tone::Ward,
            Self::Speed => Tone::Info,
            Self::Time => Tone::Warning,
            Self::Divine => Tone::Success,
            Self::Chaos => Tone::Mystic,
            Self::Reversal => Tone::Neutral,
            Self::Surge => Tone::Critical,
        }
    }
}

/// Narrative produced by applying an outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelReport {
    pub outcome: WheelOutcome,
    pub headline: String,
    pub detail: String,
}
