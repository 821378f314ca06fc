//! Status effect registry for combatants.
//!
//! Effects are timed additive stat modifiers, optionally with a per-round
//! damage tick. They never merge: applying the same named effect twice
//! produces two independent instances, each with its own countdown.
//!
//! # Round-based Duration
//!
//! `remaining_turns` is decremented once per round after the owner's action
//! resolves. An effect is removed the moment its counter reaches zero, after
//! its tick for that round has been applied.

use std::fmt;

use crate::io::Tone;

/// A single timed effect instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub name: String,
    pub remaining_turns: u32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    /// Direct HP loss applied to the owner at the end of each of its rounds.
    pub damage_per_turn: u32,
    pub tone: Tone,
}

impl Effect {
    pub fn new(name: impl Into<String>, turns: u32) -> Self {
        Self {
            name: name.into(),
            remaining_turns: turns,
            attack: 0,
            defense: 0,
            speed: 0,
            damage_per_turn: 0,
            tone: Tone::Neutral,
        }
    }

    pub fn with_attack(mut self, attack: i32) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_damage_per_turn(mut self, damage: u32) -> Self {
        self.damage_per_turn = damage;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// One row of the grouped status display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusEntry {
    pub name: String,
    pub tone: Tone,
    pub count: usize,
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{} x{}", self.name, self.count)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Active effects on a combatant, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: Vec<Effect>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Appends an effect. Same-named effects coexist as separate entries.
    pub fn add(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Removes every effect unconditionally.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Number of active instances with the given name.
    pub fn count_named(&self, name: &str) -> usize {
        self.effects.iter().filter(|e| e.name == name).count()
    }

    /// Effects that deal damage this round.
    pub fn ticking(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter().filter(|e| e.damage_per_turn > 0)
    }

    /// Decrement every countdown and remove the ones that reached zero.
    ///
    /// Returns the expired effects in application order.
    pub fn advance(&mut self) -> Vec<Effect> {
        let mut expired = Vec::new();
        let mut kept = Vec::with_capacity(self.effects.len());
        for mut effect in self.effects.drain(..) {
            effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
            if effect.remaining_turns == 0 {
                expired.push(effect);
            } else {
                kept.push(effect);
            }
        }
        self.effects = kept;
        expired
    }

    /// Group active effects by (name, tone) with instance counts.
    ///
    /// Groups keep the order in which their first instance was applied.
    pub fn summary(&self) -> Vec<StatusEntry> {
        let mut entries: Vec<StatusEntry> = Vec::new();
        for effect in &self.effects {
            match entries
                .iter_mut()
                .find(|entry| entry.name == effect.name && entry.tone == effect.tone)
            {
                Some(entry) => entry.count += 1,
                None => entries.push(StatusEntry {
                    name: effect.name.clone(),
                    tone: effect.tone,
                    count: 1,
                }),
            }
        }
        entries
    }
}
