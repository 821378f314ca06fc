//! Derived Stats - effective attack, defense and speed.
//!
//! These are NOT stored - always recomputed from base stats, active effects
//! and equipment whenever they are read.

use super::bonus::{BonusStack, StatBounds};
use crate::state::{Equipment, StatusEffects};

/// Stats that effects and equipment can modify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    #[strum(serialize = "ATK")]
    Attack,
    #[strum(serialize = "DEF")]
    Defense,
    #[strum(serialize = "SPD")]
    Speed,
}

impl StatKind {
    /// Clamp bounds for the derived value.
    pub const fn bounds(self) -> StatBounds {
        match self {
            Self::Attack => StatBounds::ATTACK,
            Self::Defense => StatBounds::DEFENSE,
            Self::Speed => StatBounds::SPEED,
        }
    }
}

/// Fixed allocation stats of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub luck: u32,
}

impl BaseStats {
    pub const fn new(attack: u32, defense: u32, speed: u32, luck: u32) -> Self {
        Self {
            attack,
            defense,
            speed,
            luck,
        }
    }

    pub const fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
        }
    }
}

/// Bonuses that apply to derived stats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivedBonuses {
    pub attack: BonusStack,
    pub defense: BonusStack,
    pub speed: BonusStack,
}

impl DerivedBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather effect modifiers and equipment bonuses into per-stat stacks.
    pub fn collect(effects: &StatusEffects, equipment: &Equipment) -> Self {
        let mut bonuses = Self::new();
        for effect in effects.iter() {
            bonuses.attack.add(effect.attack);
            bonuses.defense.add(effect.defense);
            bonuses.speed.add(effect.speed);
        }
        for (slot, item) in equipment.iter() {
            bonuses.stack_mut(slot.stat()).add(item.bonus);
        }
        bonuses
    }

    pub fn stack(&self, stat: StatKind) -> &BonusStack {
        match stat {
            StatKind::Attack => &self.attack,
            StatKind::Defense => &self.defense,
            StatKind::Speed => &self.speed,
        }
    }

    fn stack_mut(&mut self, stat: StatKind) -> &mut BonusStack {
        match stat {
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Speed => &mut self.speed,
        }
    }
}

/// Effective combat statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl DerivedStats {
    /// base + Σ bonuses, floored at 1 (attack, speed) or 0 (defense).
    pub fn compute(base: &BaseStats, bonuses: &DerivedBonuses) -> Self {
        Self {
            attack: Self::compute_one(StatKind::Attack, base, bonuses),
            defense: Self::compute_one(StatKind::Defense, base, bonuses),
            speed: Self::compute_one(StatKind::Speed, base, bonuses),
        }
    }

    pub fn compute_one(stat: StatKind, base: &BaseStats, bonuses: &DerivedBonuses) -> u32 {
        bonuses.stack(stat).apply(base.get(stat), stat.bounds())
    }

    pub const fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
        }
    }
}
