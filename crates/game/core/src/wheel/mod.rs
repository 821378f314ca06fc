//! The Wheel: a weighted random boon/hazard generator.
//!
//! `spin` draws one of eight outcomes with luck- and level-dependent weights.
//! `apply` performs the outcome's self-contained part (buffs, healing, the
//! Chaos HP cost). Time and Fate Reversal only touch counters that live on
//! the combat session, so the session handles them after `apply` returns.

mod outcome;

pub use outcome::{WheelOutcome, WheelReport};

use tracing::debug;

use crate::env::RngOracle;
use crate::io::Tone;
use crate::state::{Effect, Player};

/// Weighted outcome table and effect recipes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wheel;

impl Wheel {
    pub const POWER_ATTACK: i32 = 25;
    pub const POWER_TURNS: u32 = 3;
    pub const GUARD_DEFENSE: i32 = 20;
    pub const GUARD_TURNS: u32 = 2;
    pub const SPEED_BONUS: i32 = 15;
    pub const SPEED_TURNS: u32 = 3;
    pub const DIVINE_HP: u32 = 80;
    pub const DIVINE_MP: u32 = 40;
    pub const CHAOS_ATTACK: i32 = 40;
    pub const CHAOS_TURNS: u32 = 4;
    pub const CHAOS_HP_COST: u32 = 30;
    pub const SURGE_ATTACK: i32 = 60;
    pub const SURGE_DRAIN: u32 = 15;
    pub const SURGE_TURNS: u32 = 4;

    pub fn new() -> Self {
        Self
    }

    /// Relative weights, in [`WheelOutcome::ALL`] order.
    ///
    /// Integer division throughout; the sum is not normalised.
    pub fn weights(luck: u32, level: u32) -> [u32; 8] {
        [
            15,
            15,
            15,
            5 + luck / 2,
            5 + luck / 3,
            10,
            2 + luck / 5,
            1 + level / 10,
        ]
    }

    /// Draw one outcome.
    pub fn spin(&self, rng: &mut dyn RngOracle, luck: u32, level: u32) -> WheelOutcome {
        let weights = Self::weights(luck, level);
        // Every weight is positive, so an index always comes back.
        let index = rng.weighted_index(&weights).unwrap_or(0);
        let outcome = WheelOutcome::ALL[index];
        debug!(target: "wheel", luck, level, ?weights, %outcome, "spin");
        outcome
    }

    /// Apply the player-side part of `outcome`.
    ///
    /// No outcome touches the enemy here: Time and Fate Reversal only set
    /// counters on the combat session, which the caller owns.
    pub fn apply(&self, player: &mut Player, outcome: WheelOutcome) -> WheelReport {
        match outcome {
            WheelOutcome::Power => player.entity.add_effect(
                Effect::new("Power", Self::POWER_TURNS)
                    .with_attack(Self::POWER_ATTACK)
                    .with_tone(Tone::Alert),
            ),
            WheelOutcome::Guard => player.entity.add_effect(
                Effect::new("Guard", Self::GUARD_TURNS)
                    .with_defense(Self::GUARD_DEFENSE)
                    .with_tone(Tone::Ward),
            ),
            WheelOutcome::Speed => player.entity.add_effect(
                Effect::new("Speed", Self::SPEED_TURNS)
                    .with_speed(Self::SPEED_BONUS)
                    .with_tone(Tone::Info),
            ),
            WheelOutcome::Divine => {
                player.entity.heal(Self::DIVINE_HP);
                player.restore_mp(Self::DIVINE_MP);
            }
            WheelOutcome::Chaos => {
                player.entity.add_effect(
                    Effect::new("Chaos Force", Self::CHAOS_TURNS)
                        .with_attack(Self::CHAOS_ATTACK)
                        .with_tone(Tone::Mystic),
                );
                // Chaos hurts but never kills.
                let hp = &mut player.entity.hp;
                hp.set(hp.current.saturating_sub(Self::CHAOS_HP_COST).max(1));
            }
            WheelOutcome::Surge => player.entity.add_effect(
                Effect::new("Corrupted Surge", Self::SURGE_TURNS)
                    .with_attack(Self::SURGE_ATTACK)
                    .with_damage_per_turn(Self::SURGE_DRAIN)
                    .with_tone(Tone::Critical),
            ),
            WheelOutcome::Time | WheelOutcome::Reversal => {}
        }

        WheelReport {
            outcome,
            headline: format!("The Wheel stops on: {outcome}!"),
            detail: outcome.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn weights_follow_luck_and_level() {
        assert_eq!(Wheel::weights(5, 1), [15, 15, 15, 7, 6, 10, 3, 1]);
        assert_eq!(Wheel::weights(30, 40), [15, 15, 15, 20, 15, 10, 8, 5]);
    }

    #[test]
    fn spin_walks_cumulative_weights() {
        // luck 5, level 1: total 72. Power covers 0..15, Surge is the last slot.
        let wheel = Wheel::new();
        let mut rng = ScriptedRng::new([0, 14, 15, 71]);
        assert_eq!(wheel.spin(&mut rng, 5, 1), WheelOutcome::Power);
        assert_eq!(wheel.spin(&mut rng, 5, 1), WheelOutcome::Power);
        assert_eq!(wheel.spin(&mut rng, 5, 1), WheelOutcome::Guard);
        assert_eq!(wheel.spin(&mut rng, 5, 1), WheelOutcome::Surge);
    }

    #[test]
    fn chaos_cannot_kill() {
        let mut player = Player::new("Kael");
        player.entity.hp.set(10);
        Wheel::new().apply(&mut player, WheelOutcome::Chaos);
        assert_eq!(player.entity.hp.current, 1);
        assert_eq!(player.entity.attack(), 15 + 40);
    }

    #[test]
    fn divine_is_clamped() {
        let mut player = Player::new("Kael");
        player.entity.hp.set(50);
        player.mp.set(0);
        Wheel::new().apply(&mut player, WheelOutcome::Divine);
        assert_eq!(player.entity.hp.current, 100);
        assert_eq!(player.mp.current, 20);
    }

    #[test]
    fn session_outcomes_leave_player_untouched() {
        let mut player = Player::new("Kael");
        let before = player.clone();
        let report = Wheel::new().apply(&mut player, WheelOutcome::Reversal);
        assert_eq!(player, before);
        assert_eq!(report.headline, "The Wheel stops on: Fate Reversal!");
    }

    #[test]
    fn surge_drains_each_round() {
        let mut player = Player::new("Kael");
        Wheel::new().apply(&mut player, WheelOutcome::Surge);
        player.entity.process_turn_end();
        assert_eq!(player.entity.hp.current, 85);
        assert_eq!(player.entity.attack(), 75);
    }
}
