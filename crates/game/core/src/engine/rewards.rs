//! Outcome resolution and reward distribution.

use tracing::info;

use super::{CombatSession, EncounterResult};
use crate::env::RngOracle;
use crate::io::{CombatIo, Message, Pacing, Tone};
use crate::progression::LevelUp;
use crate::state::Combatant;

/// Everything granted for a victory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rewards {
    pub gold: u32,
    pub exp: u32,
    /// Skill stones, boss kills only.
    pub stones: u32,
    pub level_ups: Vec<LevelUp>,
}

impl CombatSession<'_> {
    /// Apply the consequences of `result` to the player.
    ///
    /// Only a victory pays out. A defeat purges the player's effects; an
    /// escape changes nothing.
    pub(super) fn resolve(
        &mut self,
        result: EncounterResult,
        io: &mut dyn CombatIo,
        rng: &mut dyn RngOracle,
    ) -> Option<Rewards> {
        match result {
            EncounterResult::Victory => Some(self.grant_rewards(io, rng)),
            EncounterResult::Defeat => {
                self.player.entity.clear_effects();
                io.emit(Message::alert(
                    "You have been unraveled... The Wheel stops turning.",
                ));
                None
            }
            EncounterResult::Escaped => None,
        }
    }

    fn grant_rewards(&mut self, io: &mut dyn CombatIo, rng: &mut dyn RngOracle) -> Rewards {
        io.emit(Message::success(format!(
            "Victory! {} has been defeated.",
            self.enemy.name()
        )));

        let gold = self.enemy.gold_reward;
        self.player.entity.gold = self.player.entity.gold.saturating_add(gold);
        io.emit(Message::success(format!("Gained {gold} Gold.")));

        let mut stones = 0;
        if self.enemy.is_boss {
            let range = self.rules.config.boss_stones;
            stones = rng.range_inclusive(range.min, range.max);
            self.player.skill_stones = self.player.skill_stones.saturating_add(stones);
            io.emit(Message::mystic(format!(
                "The boss shattered... Gained {stones} Skill Stone(s)!"
            )));
        }

        let exp = self.enemy.exp_reward;
        let level_ups = self.player.gain_exp(exp, &self.rules.skills);
        for level_up in &level_ups {
            io.emit(Message::new(Tone::Success, level_up.to_string()));
        }
        if !level_ups.is_empty() {
            io.pause(Pacing::Beat);
        }

        info!(
            target: "combat",
            gold,
            exp,
            stones,
            level = self.player.level,
            "rewards granted"
        );
        Rewards {
            gold,
            exp,
            stones,
            level_ups,
        }
    }
}
