//! The Alchemy Booth: skill stones into skills.

use game_core::{CombatIo, Message, ProgressionError, RngOracle, SkillId};

use super::GameSession;
use crate::error::Result;
use crate::menu::{labels, reject, select};

impl<R: RngOracle> GameSession<'_, R> {
    pub fn alchemy(&mut self, io: &mut dyn CombatIo) -> Result<()> {
        let transmute_cost = self.rules.config.transmute_cost;
        let empower_cost = self.rules.config.empower_cost;
        let options = labels(&[
            format!("Transmute ({transmute_cost} Stones) - Unlock New Skill"),
            format!("Empower ({empower_cost} Stones) - Level Up Skill"),
            "Back".to_string(),
        ]);

        io.emit(Message::mystic("--- ALCHEMY BOOTH ---"));
        loop {
            io.emit(Message::neutral(format!(
                "Skill Stones: {}",
                self.player.skill_stones
            )));
            match select(io, "Action: ", &options)? {
                0 => match self.player.transmute(&self.rules.skills, transmute_cost) {
                    Ok(skill) => io.emit(Message::success(format!(
                        "Transmutation successful! Mastered {}.",
                        skill.name
                    ))),
                    Err(error) => reject(io, &error),
                },
                1 => self.empower(io, empower_cost)?,
                _ => return Ok(()),
            }
        }
    }

    fn empower(&mut self, io: &mut dyn CombatIo, cost: u32) -> Result<()> {
        if self.player.skills.is_empty() {
            io.emit(Message::alert("No skills available to empower."));
            return Ok(());
        }
        if self.player.skill_stones < cost {
            reject(
                io,
                &ProgressionError::InsufficientStones {
                    required: cost,
                    available: self.player.skill_stones,
                },
            );
            return Ok(());
        }

        let ids: Vec<SkillId> = self.player.skills.iter().map(|s| s.id).collect();
        let mut options: Vec<String> = self
            .player
            .skills
            .iter()
            .map(|s| format!("{} (Lv {})", s.name, s.level))
            .collect();
        options.push("Back".to_string());

        let Some(&id) = ids.get(select(io, "Empower which skill? ", &options)?) else {
            return Ok(());
        };
        match self.player.empower(id, cost) {
            Ok(skill) => io.emit(Message::success(format!(
                "Skill {} upgraded to Level {}! ({} MP)",
                skill.name, skill.level, skill.cost
            ))),
            Err(error) => reject(io, &error),
        }
        Ok(())
    }
}
