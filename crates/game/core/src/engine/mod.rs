//! Encounter orchestration.
//!
//! A [`CombatSession`] borrows exactly one player and one enemy for the
//! length of an encounter and drives the round state machine until it
//! reaches Victory, Defeat or Escaped. Rewards are applied to the player in
//! place before the session returns.
//!
//! The session is transient: nothing here is serialised, and the freeze
//! counter and reversal flag die with it.

mod actions;
mod errors;
mod rewards;
mod turns;

pub use actions::{ActionOutcome, PlayerAction};
pub use errors::{ActionError, EncounterError};
pub use rewards::Rewards;
pub use turns::{EnemyStrike, RoundPhase};

use tracing::info;

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::io::{CombatIo, Message, RoundStatus, Tone};
use crate::state::{Combatant, Enemy, Player, SkillCatalog};
use crate::wheel::Wheel;

/// Terminal result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterResult {
    Victory,
    Defeat,
    Escaped,
}

impl EncounterResult {
    /// Victory and escape both leave the player standing.
    pub fn survived(self) -> bool {
        !matches!(self, Self::Defeat)
    }
}

/// What an encounter produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterReport {
    pub result: EncounterResult,
    /// Rounds started, including the one interrupted by a retreat.
    pub rounds: u32,
    /// Present only on victory.
    pub rewards: Option<Rewards>,
}

/// Balance parameters and content a session reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    pub config: GameConfig,
    pub skills: SkillCatalog,
}

impl Rules {
    pub fn new(config: GameConfig, skills: SkillCatalog) -> Self {
        Self { config, skills }
    }
}

/// State of one running encounter.
pub struct CombatSession<'a> {
    player: &'a mut Player,
    enemy: &'a mut Enemy,
    rules: &'a Rules,
    wheel: Wheel,
    phase: RoundPhase,
    round: u32,
    /// Enemy actions still to be skipped.
    enemy_skip_turns: u32,
    /// Reflect incoming damage for the current round only.
    reversal_armed: bool,
    /// Whether the enemy attacked this round (a frozen enemy does not tick).
    enemy_acted: bool,
}

impl<'a> CombatSession<'a> {
    pub fn new(player: &'a mut Player, enemy: &'a mut Enemy, rules: &'a Rules) -> Self {
        Self {
            player,
            enemy,
            rules,
            wheel: Wheel::new(),
            phase: RoundPhase::RoundStart,
            round: 0,
            enemy_skip_turns: 0,
            reversal_armed: false,
            enemy_acted: false,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player(&self) -> &Player {
        &*self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &*self.enemy
    }

    pub fn enemy_skip_turns(&self) -> u32 {
        self.enemy_skip_turns
    }

    pub fn reversal_armed(&self) -> bool {
        self.reversal_armed
    }

    /// Skip the enemy's next `turns` actions. Does not stack; the counter is reset.
    pub fn freeze_enemy(&mut self, turns: u32) {
        self.enemy_skip_turns = turns;
    }

    /// Reflect damage from the next enemy hit this round.
    pub fn arm_reversal(&mut self) {
        self.reversal_armed = true;
    }

    /// Current dodge chance of the player against this enemy.
    pub fn dodge_chance(&self) -> u32 {
        crate::combat::dodge_chance(
            self.player.entity.speed(),
            self.enemy.entity.speed(),
            &self.rules.config.dodge,
        )
    }

    /// Status block shown before each player decision.
    pub fn status(&self) -> RoundStatus {
        RoundStatus {
            round: self.round,
            player_name: self.player.name().to_string(),
            player_hp: self.player.entity.hp.as_pair(),
            player_mp: self.player.mp.as_pair(),
            dodge_chance: self.dodge_chance(),
            player_effects: self.player.entity.status_summary(),
            enemy_name: self.enemy.name().to_string(),
            enemy_hp: self.enemy.entity.hp.as_pair(),
            enemy_effects: self.enemy.entity.status_summary(),
        }
    }

    /// Run the encounter to completion.
    pub fn run(
        mut self,
        io: &mut dyn CombatIo,
        rng: &mut dyn RngOracle,
    ) -> Result<EncounterReport, EncounterError> {
        self.announce(io);

        let result = loop {
            if let RoundPhase::Finished(result) = self.step(io, rng)? {
                break result;
            }
        };

        let rewards = self.resolve(result, io, rng);
        info!(
            target: "combat",
            enemy = %self.enemy.name(),
            %result,
            rounds = self.round,
            "encounter finished"
        );
        Ok(EncounterReport {
            result,
            rounds: self.round,
            rewards,
        })
    }

    fn announce(&self, io: &mut dyn CombatIo) {
        let enemy = &*self.enemy;
        let tone = if enemy.rank.is_elite() {
            Tone::Critical
        } else {
            Tone::Alert
        };
        let boss = if enemy.is_boss { " (BOSS)" } else { "" };
        io.emit(Message::new(
            tone,
            format!(
                "--- COMBAT INITIATED: vs {}{boss} [Rank {}] (Reward: {} EXP) ---",
                enemy.name(),
                enemy.rank,
                enemy.exp_reward
            ),
        ));
        info!(
            target: "combat",
            player = %self.player.name(),
            enemy = %enemy.name(),
            rank = %enemy.rank,
            boss = enemy.is_boss,
            "encounter started"
        );
    }
}

/// Run one encounter between `player` and `enemy`.
///
/// This is the single entry point the outer game uses. All damage, effects
/// and rewards are applied to `player` before it returns.
pub fn run_encounter(
    player: &mut Player,
    enemy: &mut Enemy,
    rules: &Rules,
    io: &mut dyn CombatIo,
    rng: &mut dyn RngOracle,
) -> Result<EncounterReport, EncounterError> {
    CombatSession::new(player, enemy, rules).run(io, rng)
}
