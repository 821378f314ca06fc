//! The Memory Gates: wave ladders of generated enemies.

use game_core::{CombatIo, EncounterResult, Message, Rank, RngOracle, Tone, run_encounter};
use tracing::info;

use super::game_over::Resolution;
use super::{Flow, GameSession};
use crate::error::{Result, RuntimeError};
use crate::menu::{labels, select};

impl<R: RngOracle> GameSession<'_, R> {
    /// Pick a gate rank, then climb its waves.
    pub fn enter_gates(&mut self, io: &mut dyn CombatIo) -> Result<Flow> {
        let ranks: Vec<Rank> = self.content.gates.iter().map(|gate| gate.rank).collect();
        let mut options: Vec<String> = self.content.gates.iter().map(|gate| gate.label()).collect();
        options.push("Back".to_string());

        loop {
            io.emit(Message::info("--- THE MEMORY GATES ---"));
            io.emit(Message::neutral(
                "The rift here is organized into stable frequencies. \
                 Choose a rank to challenge. Be warned: exhaustion carries over.",
            ));

            let Some(&rank) = ranks.get(select(io, "Select Gate Rank: ", &options)?) else {
                return Ok(Flow::Back);
            };
            if self.run_gate(io, rank)? == Flow::ExitToMenu {
                return Ok(Flow::ExitToMenu);
            }
        }
    }

    /// Fight waves of one gate until the player withdraws or exits.
    ///
    /// Victory advances the wave; a retreat or a retry after defeat faces the
    /// same wave again with a freshly generated enemy. HP and MP carry over
    /// between waves.
    pub fn run_gate(&mut self, io: &mut dyn CombatIo, rank: Rank) -> Result<Flow> {
        let mut wave = 1;
        loop {
            let mut enemy = self
                .content
                .gates
                .spawn(rank, wave, &mut self.rng)
                .ok_or(RuntimeError::UnknownGate(rank))?;

            io.emit(Message::alert(format!("--- FRACTURE {rank} [WAVE {wave}] ---")));
            io.emit(Message::neutral(format!(
                "Current Vitality: {} HP | {} MP",
                self.player.entity.hp, self.player.mp
            )));
            if enemy.is_boss {
                io.emit(Message::new(
                    Tone::Critical,
                    format!(
                        "A massive presence looms... {} (BOSS) emerges!",
                        enemy.entity.name
                    ),
                ));
            } else {
                io.emit(Message::neutral(format!(
                    "A {} materializes from the mist.",
                    enemy.entity.name
                )));
            }

            let options = labels(&[
                format!("Challenge {}", enemy.entity.name),
                "Withdraw to Gate Entry".to_string(),
            ]);
            if select(io, "Action: ", &options)? == 1 {
                return Ok(Flow::Back);
            }

            let report = run_encounter(&mut self.player, &mut enemy, &self.rules, io, &mut self.rng)?;
            info!(target: "runtime", %rank, wave, result = %report.result, "wave finished");
            match report.result {
                EncounterResult::Victory => wave += 1,
                EncounterResult::Escaped => {}
                EncounterResult::Defeat => {
                    if self.game_over(io)? == Resolution::ExitToMenu {
                        return Ok(Flow::ExitToMenu);
                    }
                }
            }
        }
    }
}
