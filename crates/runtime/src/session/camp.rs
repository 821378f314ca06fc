//! The Ethereal Camp: the hub between encounters.

use game_core::{CombatIo, Message, RngOracle, Tone};

use super::{Flow, GameSession};
use crate::error::Result;
use crate::menu::{labels, select};

/// Which camp menu is offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampMode {
    /// The regular hub.
    Hub,
    /// Entered from the game-over menu: no gates, no saving, leaving returns
    /// to the game-over menu.
    Detour,
}

impl CampMode {
    pub fn actions(self) -> &'static [CampAction] {
        match self {
            Self::Hub => &[
                CampAction::Rest,
                CampAction::Gates,
                CampAction::Alchemy,
                CampAction::Status,
                CampAction::SaveAndExit,
            ],
            Self::Detour => &[
                CampAction::Rest,
                CampAction::Alchemy,
                CampAction::Status,
                CampAction::Return,
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampAction {
    Rest,
    Gates,
    Alchemy,
    Status,
    SaveAndExit,
    Return,
}

impl CampAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rest => "Rest (Restore HP/MP)",
            Self::Gates => "Memory Gates (Farming)",
            Self::Alchemy => "Alchemy Booth",
            Self::Status => "Status, Skills & Bag",
            Self::SaveAndExit => "Save & Exit to Menu",
            Self::Return => "Leave Camp",
        }
    }
}

impl<R: RngOracle> GameSession<'_, R> {
    /// Run the camp menu until the player leaves it.
    ///
    /// Hub mode only returns [`Flow::ExitToMenu`] (after a successful save);
    /// detour mode only returns [`Flow::Back`].
    pub fn camp(&mut self, io: &mut dyn CombatIo, mode: CampMode) -> Result<Flow> {
        io.emit(Message::info("--- THE ETHEREAL CAMP ---"));
        io.emit(Message::neutral(
            "The rift is quiet here. The air is filled with the soft hum of the Wheel, \
             providing a temporary sanctuary between the fragments of existence.",
        ));

        let actions = mode.actions();
        let options = labels(&actions.iter().map(|a| a.label()).collect::<Vec<_>>());
        loop {
            self.camp_banner(io);
            let action = actions[select(io, "Camp Action: ", &options)?];
            match action {
                CampAction::Rest => {
                    self.player.rest();
                    io.emit(Message::success(
                        "You drift into a dreamless sleep. Your vitalities are restored.",
                    ));
                }
                CampAction::Gates => {
                    if self.enter_gates(io)? == Flow::ExitToMenu {
                        return Ok(Flow::ExitToMenu);
                    }
                }
                CampAction::Alchemy => self.alchemy(io)?,
                CampAction::Status => self.show_character(io)?,
                CampAction::SaveAndExit => {
                    if self.save(io).is_ok() {
                        return Ok(Flow::ExitToMenu);
                    }
                }
                CampAction::Return => return Ok(Flow::Back),
            }
        }
    }

    fn camp_banner(&self, io: &mut dyn CombatIo) {
        let player = &self.player;
        io.emit(Message::neutral(format!(
            "{} | LV: {} | HP: {} | MP: {}",
            player.entity.name, player.level, player.entity.hp, player.mp
        )));
        io.emit(Message::neutral(format!(
            "EXP: {}/{} | GOLD: {}G | STONES: {}",
            player.exp, player.exp_to_next, player.entity.gold, player.skill_stones
        )));
    }

    /// Attributes, equipment, skills and satchel.
    pub fn show_character(&mut self, io: &mut dyn CombatIo) -> Result<()> {
        let player = &self.player;
        let stats = player.entity.derived();

        io.emit(Message::new(
            Tone::Warning,
            format!("--- {}'S RESONANCE ---", player.entity.name.to_uppercase()),
        ));
        io.emit(Message::neutral(format!(
            "LV: {} | HP: {} | MP: {} | LUCK: {}",
            player.level,
            player.entity.hp,
            player.mp,
            player.luck()
        )));
        io.emit(Message::neutral(format!(
            "ATK: {} | DEF: {} | SPD: {}",
            stats.attack, stats.defense, stats.speed
        )));

        io.emit(Message::info("Equipment:"));
        if player.entity.equipment.is_empty() {
            io.emit(Message::neutral("None."));
        }
        for (slot, item) in player.entity.equipment.iter() {
            io.emit(Message::neutral(format!("{slot}: {} ({:+})", item.name, item.bonus)));
        }

        io.emit(Message::info("Learned Skills:"));
        if player.skills.is_empty() {
            io.emit(Message::neutral("None."));
        }
        for skill in &player.skills {
            io.emit(Message::mystic(format!(
                "- {} (Lv {}): {} [{} MP]",
                skill.name, skill.level, skill.description, skill.cost
            )));
        }

        io.emit(Message::info("Satchel Inventory:"));
        if player.inventory.is_depleted() {
            io.emit(Message::neutral("Empty."));
        }
        for stack in player.inventory.available() {
            io.emit(Message::neutral(format!(
                "- {} x{}: {}",
                stack.name, stack.count, stack.description
            )));
        }

        select(io, "", &labels(&["Back"]))?;
        Ok(())
    }
}
