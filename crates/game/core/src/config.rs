/// Game balance constants and tunable combat parameters.
///
/// Constants that shape the progression curve live on the type as associated
/// consts; values that a content file may reasonably override are fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Enemy turns skipped after a Time outcome or the Time Split skill.
    pub freeze_turns: u32,

    /// Share of incoming damage (in percent) reflected while Fate Reversal is armed.
    pub reflect_percent: u32,

    /// Dodge chance tuning.
    pub dodge: DodgeTuning,

    /// Skill stones granted for a boss kill (inclusive range).
    pub boss_stones: StoneRange,

    /// Skill stones consumed by a transmutation (unlock).
    pub transmute_cost: u32,

    /// Skill stones consumed by an empowerment (upgrade).
    pub empower_cost: u32,
}

impl GameConfig {
    // ===== progression constants =====
    pub const MAX_LEVEL: u32 = 50;
    pub const STARTING_EXP_TO_NEXT: u32 = 100;
    /// Threshold growth per level, as a percentage of the previous threshold.
    pub const EXP_GROWTH_PERCENT: u32 = 125;

    pub const LEVEL_UP_HP: u32 = 10;
    pub const LEVEL_UP_MP: u32 = 10;
    pub const LEVEL_UP_ATTACK: u32 = 4;
    pub const LEVEL_UP_DEFENSE: u32 = 3;
    pub const LEVEL_UP_SPEED: u32 = 2;
    pub const LEVEL_UP_LUCK: u32 = 1;

    // ===== skill constants =====
    pub const SKILL_COST_FLOOR: u32 = 5;
    /// Cost kept per empowerment, in percent (10% reduction).
    pub const SKILL_COST_KEEP_PERCENT: u32 = 90;

    // ===== damage constants =====
    /// Minimum damage is `attack / MIN_DAMAGE_DIVISOR`, never below one.
    pub const MIN_DAMAGE_DIVISOR: u32 = 10;

    // ===== starting player =====
    pub const PLAYER_HP: u32 = 100;
    pub const PLAYER_MP: u32 = 20;
    pub const PLAYER_ATTACK: u32 = 15;
    pub const PLAYER_DEFENSE: u32 = 5;
    pub const PLAYER_SPEED: u32 = 10;
    pub const PLAYER_LUCK: u32 = 5;
    pub const PLAYER_GOLD: u32 = 50;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FREEZE_TURNS: u32 = 2;
    pub const DEFAULT_REFLECT_PERCENT: u32 = 50;
    pub const DEFAULT_TRANSMUTE_COST: u32 = 5;
    pub const DEFAULT_EMPOWER_COST: u32 = 3;

    pub fn new() -> Self {
        Self {
            freeze_turns: Self::DEFAULT_FREEZE_TURNS,
            reflect_percent: Self::DEFAULT_REFLECT_PERCENT,
            dodge: DodgeTuning::default(),
            boss_stones: StoneRange::default(),
            transmute_cost: Self::DEFAULT_TRANSMUTE_COST,
            empower_cost: Self::DEFAULT_EMPOWER_COST,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Dodge chance parameters: `clamp(floor, ceiling, player_speed * scale / enemy_speed)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DodgeTuning {
    pub floor: u32,
    pub ceiling: u32,
    pub scale: u32,
}

impl Default for DodgeTuning {
    fn default() -> Self {
        Self {
            floor: 5,
            ceiling: 75,
            scale: 20,
        }
    }
}

/// Inclusive range of skill stones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StoneRange {
    pub min: u32,
    pub max: u32,
}

impl Default for StoneRange {
    fn default() -> Self {
        Self { min: 1, max: 2 }
    }
}
