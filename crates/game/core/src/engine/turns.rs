//! Round state machine.
//!
//! ```text
//! RoundStart -> PlayerAction -> PlayerEffectTick -> EnemyFrozen  -> EnemyEffectTick -> RoundStart
//!                                               \-> EnemyAction /
//! ```
//!
//! `PlayerAction` may finish the encounter with Escaped. `PlayerEffectTick`
//! and `EnemyEffectTick` finish it with Victory or Defeat once either side
//! is down.

use tracing::debug;

use super::actions::ActionOutcome;
use super::{CombatSession, EncounterError, EncounterResult};
use crate::combat::{check_dodge, reflected_damage};
use crate::env::RngOracle;
use crate::io::{CombatIo, Message, Pacing};
use crate::state::Combatant;

/// Where a session is within its current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    RoundStart,
    PlayerAction,
    PlayerEffectTick,
    EnemyFrozen,
    EnemyAction,
    EnemyEffectTick,
    Finished(EncounterResult),
}

/// How one enemy attack resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyStrike {
    pub dodged: bool,
    /// Damage the player took.
    pub damage: u32,
    /// Damage reflected onto the enemy by Fate Reversal.
    pub reflected: u32,
}

impl CombatSession<'_> {
    /// Execute the current phase and advance to the next one.
    ///
    /// Returns the phase the session is now in. Stepping a finished session
    /// is a no-op.
    pub fn step(
        &mut self,
        io: &mut dyn CombatIo,
        rng: &mut dyn RngOracle,
    ) -> Result<RoundPhase, EncounterError> {
        let next = match self.phase {
            RoundPhase::RoundStart => {
                self.round += 1;
                self.enemy_acted = false;
                self.player.entity.process_turn_start();
                self.enemy.entity.process_turn_start();
                if self.both_alive() {
                    RoundPhase::PlayerAction
                } else {
                    RoundPhase::Finished(self.evaluate())
                }
            }
            RoundPhase::PlayerAction => {
                io.show_status(&self.status());
                match self.take_player_turn(io, rng)? {
                    ActionOutcome::Escaped => RoundPhase::Finished(EncounterResult::Escaped),
                    ActionOutcome::Resolved => RoundPhase::PlayerEffectTick,
                }
            }
            RoundPhase::PlayerEffectTick => {
                for message in self.player.entity.process_turn_end() {
                    io.emit(message);
                }
                if !self.both_alive() {
                    RoundPhase::Finished(self.evaluate())
                } else if self.enemy_skip_turns > 0 {
                    RoundPhase::EnemyFrozen
                } else {
                    RoundPhase::EnemyAction
                }
            }
            RoundPhase::EnemyFrozen => {
                io.emit(Message::info(format!(
                    "{} is frozen in a fracture of time! ({} turns remaining)",
                    self.enemy.name(),
                    self.enemy_skip_turns
                )));
                self.enemy_skip_turns -= 1;
                RoundPhase::EnemyEffectTick
            }
            RoundPhase::EnemyAction => {
                io.emit(Message::neutral(format!("{}'s turn...", self.enemy.name())));
                io.pause(Pacing::EnemyWindup);
                self.enemy_attack(io, rng);
                self.enemy_acted = true;
                RoundPhase::EnemyEffectTick
            }
            RoundPhase::EnemyEffectTick => {
                if self.enemy_acted {
                    for message in self.enemy.entity.process_turn_end() {
                        io.emit(message);
                    }
                }
                self.reversal_armed = false;
                io.pause(Pacing::RoundEnd);
                if self.both_alive() {
                    RoundPhase::RoundStart
                } else {
                    RoundPhase::Finished(self.evaluate())
                }
            }
            RoundPhase::Finished(result) => RoundPhase::Finished(result),
        };

        debug!(target: "combat", round = self.round, from = ?self.phase, to = ?next, "phase");
        self.phase = next;
        Ok(next)
    }

    /// Resolve one enemy attack against the player.
    ///
    /// Rolls the dodge, applies the hit and, while Fate Reversal is armed,
    /// reflects `floor(damage * reflect%) + enemy defense` straight onto the
    /// enemy's HP.
    pub fn enemy_attack(&mut self, io: &mut dyn CombatIo, rng: &mut dyn RngOracle) -> EnemyStrike {
        let chance = self.dodge_chance();
        let roll = rng.roll_d100();
        if check_dodge(chance, roll) {
            debug!(target: "combat", chance, roll, "dodged");
            io.emit(Message::info(format!(
                "DODGED! You nimbly avoid {}'s attack!",
                self.enemy.name()
            )));
            return EnemyStrike {
                dodged: true,
                ..EnemyStrike::default()
            };
        }

        let damage = self.player.entity.take_damage(self.enemy.entity.attack());
        io.emit(Message::alert(format!(
            "{} attacks for {damage} damage!",
            self.enemy.name()
        )));

        let mut reflected = 0;
        if self.reversal_armed {
            reflected = reflected_damage(
                damage,
                self.rules.config.reflect_percent,
                self.enemy.entity.defense(),
            );
            self.enemy.entity.lose_hp(reflected);
            io.emit(Message::info(format!(
                "Fate Reversal! {} is struck by their own power for {reflected} damage!",
                self.enemy.name()
            )));
        }

        EnemyStrike {
            dodged: false,
            damage,
            reflected,
        }
    }

    fn both_alive(&self) -> bool {
        self.player.is_alive() && self.enemy.is_alive()
    }

    /// A dead player loses even if the enemy fell in the same round.
    fn evaluate(&self) -> EncounterResult {
        if self.player.is_alive() {
            EncounterResult::Victory
        } else {
            EncounterResult::Defeat
        }
    }
}
