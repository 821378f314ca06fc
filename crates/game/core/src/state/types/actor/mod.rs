//! Combatant state shared by the player and enemies.
//!
//! - Entity: hit points, base stats, effects, equipment, gold
//! - Equipment: slot map feeding derived stats
//! - Inventory: the player's satchel

pub mod equipment;
pub mod inventory;

pub use equipment::{Equipment, EquipmentItem, EquipmentSlot};
pub use inventory::{InventoryState, ItemId, ItemKind, ItemStack};

use tracing::debug;

use super::common::ResourceMeter;
use super::status::{Effect, StatusEffects, StatusEntry};
use crate::combat::calculate_damage;
use crate::io::Message;
use crate::stats::{BaseStats, DerivedBonuses, DerivedStats, StatKind};

/// Complete combatant state.
///
/// # Invariants
///
/// - `hp.current` stays within `0..=hp.maximum`
/// - Effective attack and speed are at least 1, effective defense at least 0
/// - Alive exactly when `hp.current > 0`
///
/// Effects are transient combat state and are not persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub name: String,
    pub hp: ResourceMeter,
    pub base: BaseStats,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub effects: StatusEffects,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,
    pub gold: u32,
}

impl Entity {
    pub fn new(name: impl Into<String>, max_hp: u32, base: BaseStats) -> Self {
        Self {
            name: name.into(),
            hp: ResourceMeter::full(max_hp),
            base,
            effects: StatusEffects::new(),
            equipment: Equipment::empty(),
            gold: 0,
        }
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp.current > 0
    }

    /// Effective stats from base, effects and equipment.
    pub fn derived(&self) -> DerivedStats {
        DerivedStats::compute(
            &self.base,
            &DerivedBonuses::collect(&self.effects, &self.equipment),
        )
    }

    pub fn stat(&self, stat: StatKind) -> u32 {
        DerivedStats::compute_one(
            stat,
            &self.base,
            &DerivedBonuses::collect(&self.effects, &self.equipment),
        )
    }

    pub fn attack(&self) -> u32 {
        self.stat(StatKind::Attack)
    }

    pub fn defense(&self) -> u32 {
        self.stat(StatKind::Defense)
    }

    pub fn speed(&self) -> u32 {
        self.stat(StatKind::Speed)
    }

    /// Receive a hit from an attacker with the given attack value.
    ///
    /// Returns the computed damage (after the minimum floor). HP never drops
    /// below zero, so the HP actually lost may be smaller.
    pub fn take_damage(&mut self, attacker_attack: u32) -> u32 {
        let damage = calculate_damage(attacker_attack, self.defense());
        self.hp.drain(damage);
        debug!(
            target: "combat",
            defender = %self.name,
            attacker_attack,
            damage,
            hp = self.hp.current,
            "damage applied"
        );
        damage
    }

    /// Direct HP loss that bypasses mitigation. Returns HP actually lost.
    pub fn lose_hp(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount)
    }

    /// Restore HP, clamped to the maximum. Returns HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Appends an effect. No merging with same-named effects.
    pub fn add_effect(&mut self, effect: Effect) {
        debug!(
            target: "combat",
            owner = %self.name,
            effect = %effect.name,
            turns = effect.remaining_turns,
            "effect added"
        );
        self.effects.add(effect);
    }

    /// Start-of-round hook. Nothing reacts here yet.
    pub fn process_turn_start(&mut self) {}

    /// End-of-round hook for this combatant.
    ///
    /// Applies every damage tick first, then decrements all countdowns and
    /// removes expired effects, reporting each step.
    pub fn process_turn_end(&mut self) -> Vec<Message> {
        let mut messages = Vec::new();

        let ticks: Vec<_> = self
            .effects
            .ticking()
            .map(|effect| (effect.name.clone(), effect.tone, effect.damage_per_turn))
            .collect();
        for (name, tone, damage) in ticks {
            self.hp.drain(damage);
            messages.push(Message::new(
                tone,
                format!("{name} affects {}! (-{damage} HP)", self.name),
            ));
        }

        for expired in self.effects.advance() {
            messages.push(Message::new(
                expired.tone,
                format!("Effect '{}' has worn off.", expired.name),
            ));
        }

        messages
    }

    /// Remove every effect (defeat and game-over reset).
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Grouped effect list for display. Read-only.
    pub fn status_summary(&self) -> Vec<StatusEntry> {
        self.effects.summary()
    }
}

/// Anything that fights: exposes its [`Entity`].
pub trait Combatant {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    fn name(&self) -> &str {
        &self.entity().name
    }

    fn is_alive(&self) -> bool {
        self.entity().is_alive()
    }
}

impl Combatant for Entity {
    fn entity(&self) -> &Entity {
        self
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Tone;

    fn dummy(hp: u32) -> Entity {
        Entity::new("Dummy", hp, BaseStats::new(10, 5, 10, 0))
    }

    #[test]
    fn take_damage_never_goes_below_zero() {
        let mut target = dummy(5);
        let dealt = target.take_damage(100);
        assert!(dealt > 5);
        assert_eq!(target.hp.current, 0);
        assert!(!target.is_alive());
    }

    #[test]
    fn heal_is_clamped() {
        let mut target = dummy(100);
        target.lose_hp(30);
        assert_eq!(target.heal(80), 30);
        assert_eq!(target.hp.current, 100);
    }

    #[test]
    fn one_turn_effect_expires_after_one_call() {
        let mut target = dummy(100);
        target.add_effect(Effect::new("Guard", 1).with_defense(20));
        assert_eq!(target.defense(), 25);

        let messages = target.process_turn_end();
        let worn: Vec<_> = messages
            .iter()
            .filter(|m| m.text == "Effect 'Guard' has worn off.")
            .collect();
        assert_eq!(worn.len(), 1);
        assert_eq!(target.defense(), 5);

        assert!(target.process_turn_end().is_empty());
    }

    #[test]
    fn ticks_apply_before_expiry() {
        let mut target = dummy(100);
        target.add_effect(
            Effect::new("Corrupted Surge", 1)
                .with_attack(60)
                .with_damage_per_turn(15)
                .with_tone(Tone::Critical),
        );

        let messages = target.process_turn_end();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "Corrupted Surge affects Dummy! (-15 HP)");
        assert_eq!(messages[1].text, "Effect 'Corrupted Surge' has worn off.");
        assert_eq!(target.hp.current, 85);
    }

    #[test]
    fn stacked_effects_tick_independently() {
        let mut target = dummy(100);
        let surge = Effect::new("Surge", 2).with_damage_per_turn(10);
        target.add_effect(surge.clone());
        target.process_turn_end();
        target.add_effect(surge);

        // First instance: 1 turn left, second: 2.
        let messages = target.process_turn_end();
        assert_eq!(target.hp.current, 100 - 10 - 20);
        assert_eq!(messages.iter().filter(|m| m.text.contains("worn off")).count(), 1);
        assert_eq!(target.effects.count_named("Surge"), 1);
    }

    #[test]
    fn equipment_feeds_matching_stat() {
        let mut target = dummy(100);
        target
            .equipment
            .equip(EquipmentSlot::Armor, EquipmentItem::new("Plate", 4));
        assert_eq!(target.defense(), 9);
        assert_eq!(target.attack(), 10);
    }
}
