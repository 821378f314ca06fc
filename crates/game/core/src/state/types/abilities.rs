//! Skills and the unlock catalog.
//!
//! Skills are identified by [`SkillId`] everywhere; display names are only
//! for menus and messages.

use std::str::FromStr;

use crate::config::GameConfig;

/// Stable skill identifier.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum SkillId {
    /// Echo Step: speed buff equal to base speed.
    Echo,
    /// Fate Guard: defense buff equal to base defense.
    Guard,
    /// Light Arc: triple-attack strike.
    Light,
    /// Time Split: freezes the enemy.
    Time,
    /// Final Mercy: quintuple-attack strike.
    Mercy,
}

impl SkillId {
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_str(value).ok()
    }
}

/// A learned (or learnable) skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub level: u32,
}

impl Skill {
    pub fn new(
        id: SkillId,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            cost,
            level: 1,
        }
    }

    /// Raise the level and cut the cost by 10%, never below the floor.
    pub fn empower(&mut self) {
        self.level += 1;
        self.cost = (self.cost * GameConfig::SKILL_COST_KEEP_PERCENT / 100)
            .max(GameConfig::SKILL_COST_FLOOR);
    }

    /// Menu label, e.g. `Echo Step (10 MP)`.
    pub fn label(&self) -> String {
        format!("{} ({} MP)", self.name, self.cost)
    }
}

/// A skill granted automatically on reaching `level`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillUnlock {
    pub level: u32,
    pub skill: Skill,
}

/// Every learnable skill, ordered by unlock level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCatalog {
    unlocks: Vec<SkillUnlock>,
}

impl SkillCatalog {
    pub fn new(mut unlocks: Vec<SkillUnlock>) -> Self {
        unlocks.sort_by_key(|unlock| unlock.level);
        Self { unlocks }
    }

    /// The five skills of the base game.
    pub fn builtin() -> Self {
        Self::new(vec![
            SkillUnlock {
                level: 5,
                skill: Skill::new(
                    SkillId::Echo,
                    "Echo Step",
                    "Blur your form, doubling SPD for 3 Rounds.",
                    10,
                ),
            },
            SkillUnlock {
                level: 10,
                skill: Skill::new(
                    SkillId::Guard,
                    "Fate Guard",
                    "Brace against destiny, doubling DEF for 2 Rounds.",
                    15,
                ),
            },
            SkillUnlock {
                level: 15,
                skill: Skill::new(
                    SkillId::Light,
                    "Light Arc",
                    "A horizontal strike of pure hope. High damage.",
                    45,
                ),
            },
            SkillUnlock {
                level: 25,
                skill: Skill::new(
                    SkillId::Time,
                    "Time Split",
                    "Fracture the moment. Enemy skips turn.",
                    40,
                ),
            },
            SkillUnlock {
                level: 40,
                skill: Skill::new(
                    SkillId::Mercy,
                    "Final Mercy",
                    "A strike that ends the conflict with peace.",
                    60,
                ),
            },
        ])
    }

    /// Skill granted on reaching exactly `level`.
    pub fn unlock_at(&self, level: u32) -> Option<&Skill> {
        self.unlocks
            .iter()
            .find(|unlock| unlock.level == level)
            .map(|unlock| &unlock.skill)
    }

    pub fn get(&self, id: SkillId) -> Option<&Skill> {
        self.unlocks
            .iter()
            .map(|unlock| &unlock.skill)
            .find(|skill| skill.id == id)
    }

    /// First skill (by unlock level) that `is_known` rejects.
    pub fn first_unlearned(&self, is_known: impl Fn(SkillId) -> bool) -> Option<&Skill> {
        self.unlocks
            .iter()
            .map(|unlock| &unlock.skill)
            .find(|skill| !is_known(skill.id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillUnlock> {
        self.unlocks.iter()
    }

    pub fn len(&self) -> usize {
        self.unlocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocks.is_empty()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empower_cuts_cost_with_floor() {
        let mut skill = Skill::new(SkillId::Echo, "Echo Step", "", 10);
        skill.empower();
        assert_eq!((skill.level, skill.cost), (2, 9));

        let mut cheap = Skill::new(SkillId::Echo, "Echo Step", "", 5);
        cheap.empower();
        assert_eq!(cheap.cost, 5);
    }

    #[test]
    fn builtin_unlock_levels() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.unlock_at(5).map(|s| s.id), Some(SkillId::Echo));
        assert_eq!(catalog.unlock_at(25).map(|s| s.id), Some(SkillId::Time));
        assert!(catalog.unlock_at(6).is_none());
    }

    #[test]
    fn first_unlearned_follows_unlock_order() {
        let catalog = SkillCatalog::builtin();
        let next = catalog.first_unlearned(|id| matches!(id, SkillId::Echo | SkillId::Light));
        assert_eq!(next.map(|s| s.id), Some(SkillId::Guard));
    }

    #[test]
    fn ids_parse_from_lowercase() {
        assert_eq!(SkillId::parse("mercy"), Some(SkillId::Mercy));
        assert_eq!(SkillId::Light.to_string(), "light");
        assert!(SkillId::parse("Final Mercy").is_none());
    }
}
