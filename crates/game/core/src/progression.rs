//! Player progression: experience, level-ups, skill and item use, alchemy.
//!
//! Every operation here is validated before anything is mutated, so a failed
//! call leaves the player exactly as it was.

use std::fmt;

use tracing::info;

use crate::config::GameConfig;
use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::state::{ItemId, ItemKind, Player, Skill, SkillCatalog, SkillId};

/// Errors raised by progression operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("Skill not mastered.")]
    UnknownSkill(SkillId),

    #[error("Insufficient Mana (MP).")]
    InsufficientMana { cost: u32, available: u32 },

    #[error("Item not found or depleted.")]
    ItemUnavailable(ItemId),

    #[error("Skill not found.")]
    SkillNotFound(SkillId),

    #[error("Insufficient Skill Stones ({required} required).")]
    InsufficientStones { required: u32, available: u32 },

    #[error("All known resonances have already been mastered.")]
    AllSkillsMastered,
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownSkill(_) | Self::SkillNotFound(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownSkill(_) | Self::SkillNotFound(_) => ErrorKind::UnknownTarget,
            Self::InsufficientMana { .. }
            | Self::ItemUnavailable(_)
            | Self::InsufficientStones { .. }
            | Self::AllSkillsMastered => ErrorKind::InsufficientResource,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSkill(_) => "PROGRESSION_UNKNOWN_SKILL",
            Self::InsufficientMana { .. } => "PROGRESSION_INSUFFICIENT_MANA",
            Self::ItemUnavailable(_) => "PROGRESSION_ITEM_UNAVAILABLE",
            Self::SkillNotFound(_) => "PROGRESSION_SKILL_NOT_FOUND",
            Self::InsufficientStones { .. } => "PROGRESSION_INSUFFICIENT_STONES",
            Self::AllSkillsMastered => "PROGRESSION_ALL_SKILLS_MASTERED",
        }
    }
}

/// One level gained, with the skill it unlocked if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub learned: Option<Skill>,
}

impl fmt::Display for LevelUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.learned {
            Some(skill) => write!(
                f,
                "LEVEL UP! Reach Level {}. New Skill: {}!",
                self.level, skill.name
            ),
            None => write!(f, "LEVEL UP! Reach Level {}.", self.level),
        }
    }
}

/// Result of consuming one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemUse {
    pub name: String,
    pub kind: ItemKind,
    pub value: u32,
}

impl fmt::Display for ItemUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You used {}. Restored {} {}.",
            self.name, self.value, self.kind
        )
    }
}

impl Player {
    /// Accumulate experience and level up as many times as it allows.
    ///
    /// Returns one [`LevelUp`] per level gained, in order. Nothing is gained
    /// past [`GameConfig::MAX_LEVEL`]; experience keeps accumulating there.
    pub fn gain_exp(&mut self, amount: u32, catalog: &SkillCatalog) -> Vec<LevelUp> {
        self.exp = self.exp.saturating_add(amount);
        let mut gained = Vec::new();
        while self.exp >= self.exp_to_next && self.level < GameConfig::MAX_LEVEL {
            self.exp -= self.exp_to_next;
            gained.push(self.level_up(catalog));
        }
        gained
    }

    fn level_up(&mut self, catalog: &SkillCatalog) -> LevelUp {
        self.level += 1;
        self.entity.hp.grow(GameConfig::LEVEL_UP_HP);
        self.mp.grow(GameConfig::LEVEL_UP_MP);

        let base = &mut self.entity.base;
        base.attack += GameConfig::LEVEL_UP_ATTACK;
        base.defense += GameConfig::LEVEL_UP_DEFENSE;
        base.speed += GameConfig::LEVEL_UP_SPEED;
        base.luck += GameConfig::LEVEL_UP_LUCK;

        self.exp_to_next = self.exp_to_next * GameConfig::EXP_GROWTH_PERCENT / 100;

        // A skill already bought through alchemy is not granted twice.
        let learned = catalog
            .unlock_at(self.level)
            .filter(|skill| !self.knows(skill.id))
            .cloned();
        if let Some(skill) = &learned {
            self.skills.push(skill.clone());
        }

        info!(
            target: "progression",
            player = %self.entity.name,
            level = self.level,
            learned = learned.as_ref().map(|s| s.id.as_ref()),
            "level up"
        );
        LevelUp {
            level: self.level,
            learned,
        }
    }

    /// Pay for a learned skill.
    ///
    /// On success MP is deducted and the skill is returned for the combat
    /// session to resolve.
    pub fn use_skill(&mut self, id: SkillId) -> Result<Skill, ProgressionError> {
        let skill = self
            .skill(id)
            .cloned()
            .ok_or(ProgressionError::UnknownSkill(id))?;
        if self.mp.current < skill.cost {
            return Err(ProgressionError::InsufficientMana {
                cost: skill.cost,
                available: self.mp.current,
            });
        }
        self.mp.drain(skill.cost);
        Ok(skill)
    }

    /// Consume one item and apply its restoration.
    pub fn use_item(&mut self, id: &ItemId) -> Result<ItemUse, ProgressionError> {
        let stack = self
            .inventory
            .take_one(id)
            .ok_or_else(|| ProgressionError::ItemUnavailable(id.clone()))?;
        match stack.kind {
            ItemKind::Heal => {
                self.entity.heal(stack.value);
            }
            ItemKind::Mana => {
                self.restore_mp(stack.value);
            }
        }
        Ok(ItemUse {
            name: stack.name,
            kind: stack.kind,
            value: stack.value,
        })
    }

    /// Level a learned skill and cut its cost.
    pub fn upgrade_skill(&mut self, id: SkillId) -> Result<&Skill, ProgressionError> {
        let skill = self
            .skills
            .iter_mut()
            .find(|skill| skill.id == id)
            .ok_or(ProgressionError::SkillNotFound(id))?;
        skill.empower();
        Ok(skill)
    }

    /// Spend stones to learn the first catalog skill not yet known.
    pub fn transmute(
        &mut self,
        catalog: &SkillCatalog,
        cost: u32,
    ) -> Result<Skill, ProgressionError> {
        let skill = catalog
            .first_unlearned(|id| self.knows(id))
            .cloned()
            .ok_or(ProgressionError::AllSkillsMastered)?;
        self.spend_stones(cost)?;
        self.skills.push(skill.clone());
        info!(target: "progression", skill = %skill.id, "transmuted");
        Ok(skill)
    }

    /// Spend stones to upgrade a learned skill.
    pub fn empower(&mut self, id: SkillId, cost: u32) -> Result<&Skill, ProgressionError> {
        if !self.knows(id) {
            return Err(ProgressionError::SkillNotFound(id));
        }
        self.spend_stones(cost)?;
        self.upgrade_skill(id)
    }

    fn spend_stones(&mut self, cost: u32) -> Result<(), ProgressionError> {
        if self.skill_stones < cost {
            return Err(ProgressionError::InsufficientStones {
                required: cost,
                available: self.skill_stones,
            });
        }
        self.skill_stones -= cost;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_grant_crosses_multiple_thresholds() {
        let mut player = Player::new("Kael");
        let ups = player.gain_exp(250, &SkillCatalog::builtin());

        assert_eq!(ups.len(), 2);
        assert_eq!(player.level, 3);
        // 250 - 100 - 125
        assert_eq!(player.exp, 25);
        assert_eq!(player.exp_to_next, 156);
        assert!(player.exp < player.exp_to_next);
        assert_eq!(ups[0].to_string(), "LEVEL UP! Reach Level 2.");
    }

    #[test]
    fn level_up_restores_and_grows() {
        let mut player = Player::new("Kael");
        player.entity.hp.set(1);
        player.gain_exp(100, &SkillCatalog::builtin());

        assert_eq!(player.entity.hp.as_pair(), (110, 110));
        assert_eq!(player.mp.as_pair(), (30, 30));
        assert_eq!(player.entity.base.attack, 19);
        assert_eq!(player.entity.base.defense, 8);
        assert_eq!(player.entity.base.speed, 12);
        assert_eq!(player.entity.base.luck, 6);
    }

    #[test]
    fn unlock_level_teaches_skill() {
        let mut player = Player::new("Kael");
        player.level = 4;
        let ups = player.gain_exp(100, &SkillCatalog::builtin());

        assert_eq!(ups[0].to_string(), "LEVEL UP! Reach Level 5. New Skill: Echo Step!");
        assert!(player.knows(SkillId::Echo));
    }

    #[test]
    fn max_level_is_a_hard_cap() {
        let mut player = Player::new("Kael");
        player.level = GameConfig::MAX_LEVEL;
        let ups = player.gain_exp(1_000_000, &SkillCatalog::builtin());
        assert!(ups.is_empty());
        assert_eq!(player.level, GameConfig::MAX_LEVEL);
    }

    #[test]
    fn use_skill_checks_knowledge_then_mana() {
        let catalog = SkillCatalog::builtin();
        let mut player = Player::new("Kael");
        assert_eq!(
            player.use_skill(SkillId::Light),
            Err(ProgressionError::UnknownSkill(SkillId::Light))
        );

        player.skills.push(catalog.get(SkillId::Light).cloned().unwrap());
        let err = player.use_skill(SkillId::Light).unwrap_err();
        assert_eq!(err.to_string(), "Insufficient Mana (MP).");
        assert_eq!(err.kind(), ErrorKind::InsufficientResource);
        assert_eq!(player.mp.current, 20);

        player.skills.push(catalog.get(SkillId::Echo).cloned().unwrap());
        assert!(player.use_skill(SkillId::Echo).is_ok());
        assert_eq!(player.mp.current, 10);
    }

    #[test]
    fn use_item_decrements_and_restores() {
        let mut player = Player::new("Kael");
        player.entity.hp.set(40);
        let used = player.use_item(&ItemId::new("mend_extract")).unwrap();
        assert_eq!(used.to_string(), "You used Mend-Extract. Restored 50 HP.");
        assert_eq!(player.entity.hp.current, 90);

        let ether = ItemId::new("ether_drop");
        player.use_item(&ether).unwrap();
        assert_eq!(
            player.use_item(&ether),
            Err(ProgressionError::ItemUnavailable(ether))
        );
    }

    #[test]
    fn upgrade_requires_learned_skill() {
        let mut player = Player::new("Kael");
        assert!(matches!(
            player.upgrade_skill(SkillId::Echo),
            Err(ProgressionError::SkillNotFound(SkillId::Echo))
        ));
    }

    #[test]
    fn transmute_spends_stones_only_on_success() {
        let catalog = SkillCatalog::builtin();
        let mut player = Player::new("Kael");
        player.skill_stones = 4;
        assert!(matches!(
            player.transmute(&catalog, 5),
            Err(ProgressionError::InsufficientStones { required: 5, .. })
        ));
        assert_eq!(player.skill_stones, 4);

        player.skill_stones = 5;
        let learned = player.transmute(&catalog, 5).unwrap();
        assert_eq!(learned.id, SkillId::Echo);
        assert_eq!(player.skill_stones, 0);
    }

    #[test]
    fn transmute_reports_mastery() {
        let catalog = SkillCatalog::builtin();
        let mut player = Player::new("Kael");
        player.skills = catalog.iter().map(|unlock| unlock.skill.clone()).collect();
        player.skill_stones = 10;
        assert_eq!(
            player.transmute(&catalog, 5),
            Err(ProgressionError::AllSkillsMastered)
        );
        assert_eq!(player.skill_stones, 10);
    }

    #[test]
    fn empower_spends_and_levels() {
        let catalog = SkillCatalog::builtin();
        let mut player = Player::new("Kael");
        player.skills.push(catalog.get(SkillId::Guard).cloned().unwrap());
        player.skill_stones = 3;

        let skill = player.empower(SkillId::Guard, 3).unwrap();
        assert_eq!((skill.level, skill.cost), (2, 13));
        assert_eq!(player.skill_stones, 0);
    }
}
