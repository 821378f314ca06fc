//! The two combatant variants: the player and an enemy.

use super::abilities::{Skill, SkillId};
use super::actor::{Combatant, Entity, InventoryState, ItemStack};
use super::common::ResourceMeter;
use crate::config::GameConfig;
use crate::stats::BaseStats;

/// The player character and everything progression tracks about it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub entity: Entity,
    pub mp: ResourceMeter,
    pub level: u32,
    pub exp: u32,
    pub exp_to_next: u32,
    pub skill_stones: u32,
    pub skills: Vec<Skill>,
    pub inventory: InventoryState,
}

impl Player {
    /// A level 1 character with the starting satchel.
    pub fn new(name: impl Into<String>) -> Self {
        let base = BaseStats::new(
            GameConfig::PLAYER_ATTACK,
            GameConfig::PLAYER_DEFENSE,
            GameConfig::PLAYER_SPEED,
            GameConfig::PLAYER_LUCK,
        );
        Self {
            entity: Entity::new(name, GameConfig::PLAYER_HP, base).with_gold(GameConfig::PLAYER_GOLD),
            mp: ResourceMeter::full(GameConfig::PLAYER_MP),
            level: 1,
            exp: 0,
            exp_to_next: GameConfig::STARTING_EXP_TO_NEXT,
            skill_stones: 0,
            skills: Vec::new(),
            inventory: InventoryState::starter(),
        }
    }

    pub fn with_inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn luck(&self) -> u32 {
        self.entity.base.luck
    }

    pub fn knows(&self, id: SkillId) -> bool {
        self.skills.iter().any(|skill| skill.id == id)
    }

    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id == id)
    }

    /// Restore MP, clamped to the maximum. Returns MP actually restored.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        self.mp.restore(amount)
    }

    /// Put a stack in the satchel, merging with an existing stack of the same id.
    pub fn add_item(&mut self, stack: ItemStack) {
        self.inventory.add(stack);
    }

    /// Full HP and MP.
    pub fn rest(&mut self) {
        self.entity.hp.fill();
        self.mp.fill();
    }
}

impl Combatant for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

/// Difficulty tag shown in the encounter banner.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    F,
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rank {
    /// Ranks B and above get an emphasised banner.
    pub fn is_elite(self) -> bool {
        self >= Self::B
    }
}

/// An opponent, built fresh for each encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub entity: Entity,
    pub exp_reward: u32,
    pub gold_reward: u32,
    pub rank: Rank,
    pub is_boss: bool,
}

impl Enemy {
    pub fn new(name: impl Into<String>, max_hp: u32, base: BaseStats, exp_reward: u32) -> Self {
        Self {
            entity: Entity::new(name, max_hp, base),
            exp_reward,
            gold_reward: 0,
            rank: Rank::F,
            is_boss: false,
        }
    }

    pub fn with_gold_reward(mut self, gold: u32) -> Self {
        self.gold_reward = gold;
        self
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    pub fn boss(mut self) -> Self {
        self.is_boss = true;
        self
    }
}

impl Combatant for Enemy {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
