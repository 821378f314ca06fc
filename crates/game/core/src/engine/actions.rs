//! Player action menus and their resolution.
//!
//! Every menu is an explicit retry loop: an out-of-range selection, a "Back"
//! entry or a failed action brings the player back to the action menu
//! without consuming the round.

use tracing::{debug, warn};

use super::{ActionError, CombatSession, EncounterError};
use crate::env::RngOracle;
use crate::error::GameError;
use crate::io::{CombatIo, Message, Tone};
use crate::state::{Combatant, Effect, ItemId, Skill, SkillId};
use crate::wheel::WheelOutcome;

/// A fully selected player action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Spin,
    Skill(SkillId),
    Item(ItemId),
    Retreat,
}

/// Whether the round continues after the player's action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Resolved,
    Escaped,
}

const ACTION_MENU: [&str; 6] = [
    "Attack",
    "Spin the Wheel",
    "Use Skill",
    "Items",
    "Defend",
    "Retreat Safely",
];

impl CombatSession<'_> {
    /// Prompt until an action succeeds, then report how the round continues.
    pub(super) fn take_player_turn(
        &mut self,
        io: &mut dyn CombatIo,
        rng: &mut dyn RngOracle,
    ) -> Result<ActionOutcome, EncounterError> {
        loop {
            let Some(action) = self.select_action(io)? else {
                continue;
            };
            match self.perform(action, io, rng) {
                Ok(outcome) => return Ok(outcome),
                Err(error) => reject(io, &error),
            }
        }
    }

    /// Walk the action menu and its submenus.
    ///
    /// `None` means "show the action menu again" (Defend, Back, or a submenu
    /// that had nothing to offer).
    fn select_action(
        &mut self,
        io: &mut dyn CombatIo,
    ) -> Result<Option<PlayerAction>, EncounterError> {
        let labels: Vec<String> = ACTION_MENU.iter().map(|s| s.to_string()).collect();
        let action = match choose_index(io, "Action: ", &labels)? {
            0 => Some(PlayerAction::Attack),
            1 => Some(PlayerAction::Spin),
            2 => self.select_skill(io)?,
            3 => self.select_item(io)?,
            5 => Some(PlayerAction::Retreat),
            // Defend has no effect of its own.
            _ => None,
        };
        Ok(action)
    }

    fn select_skill(&mut self, io: &mut dyn CombatIo) -> Result<Option<PlayerAction>, EncounterError> {
        if self.player.skills.is_empty() {
            reject(io, &ActionError::NoSkillsLearned);
            return Ok(None);
        }

        let ids: Vec<SkillId> = self.player.skills.iter().map(|s| s.id).collect();
        let mut labels: Vec<String> = self.player.skills.iter().map(Skill::label).collect();
        labels.push("Back".to_string());

        let index = choose_index(io, "Skill: ", &labels)?;
        Ok(ids.get(index).copied().map(PlayerAction::Skill))
    }

    fn select_item(&mut self, io: &mut dyn CombatIo) -> Result<Option<PlayerAction>, EncounterError> {
        if self.player.inventory.is_depleted() {
            reject(io, &ActionError::EmptySatchel);
            return Ok(None);
        }

        let ids: Vec<ItemId> = self
            .player
            .inventory
            .available()
            .map(|stack| stack.id.clone())
            .collect();
        let mut labels: Vec<String> = self
            .player
            .inventory
            .available()
            .map(|stack| stack.label())
            .collect();
        labels.push("Back".to_string());

        let index = choose_index(io, "Use Item: ", &labels)?;
        Ok(ids.get(index).cloned().map(PlayerAction::Item))
    }

    /// Resolve a selected action.
    ///
    /// Failures leave the player untouched and do not consume the round.
    pub fn perform(
        &mut self,
        action: PlayerAction,
        io: &mut dyn CombatIo,
        rng: &mut dyn RngOracle,
    ) -> Result<ActionOutcome, ActionError> {
        debug!(target: "combat", round = self.round, ?action, "player action");
        match action {
            PlayerAction::Attack => {
                let damage = self.enemy.entity.take_damage(self.player.entity.attack());
                io.emit(Message::neutral(format!(
                    "You strike {} for {damage} damage!",
                    self.enemy.name()
                )));
            }
            PlayerAction::Spin => self.spin_wheel(io, rng),
            PlayerAction::Skill(id) => {
                let skill = self.player.use_skill(id)?;
                io.emit(Message::mystic(format!(
                    "You evoke {}: {}",
                    skill.name, skill.description
                )));
                self.apply_skill(&skill, io);
            }
            PlayerAction::Item(id) => {
                let used = self.player.use_item(&id)?;
                io.emit(Message::success(used.to_string()));
            }
            PlayerAction::Retreat => {
                io.emit(Message::info(
                    "You find a gap in the enemy's stance and withdraw swiftly.",
                ));
                return Ok(ActionOutcome::Escaped);
            }
        }
        Ok(ActionOutcome::Resolved)
    }

    fn spin_wheel(&mut self, io: &mut dyn CombatIo, rng: &mut dyn RngOracle) {
        let outcome = self
            .wheel
            .spin(rng, self.player.luck(), self.player.level);
        let report = self.wheel.apply(self.player, outcome);

        match outcome {
            WheelOutcome::Time => self.freeze_enemy(self.rules.config.freeze_turns),
            WheelOutcome::Reversal => self.arm_reversal(),
            _ => {}
        }

        io.emit(Message::new(outcome.tone(), report.headline));
        io.emit(Message::info(report.detail));
    }

    /// Skill effects, keyed by id.
    fn apply_skill(&mut self, skill: &Skill, io: &mut dyn CombatIo) {
        let base = self.player.entity.base;
        match skill.id {
            SkillId::Echo => self.player.entity.add_effect(
                Effect::new(skill.name.as_str(), 3)
                    .with_speed(to_modifier(base.speed))
                    .with_tone(Tone::Info),
            ),
            SkillId::Guard => self.player.entity.add_effect(
                Effect::new(skill.name.as_str(), 2)
                    .with_defense(to_modifier(base.defense))
                    .with_tone(Tone::Ward),
            ),
            SkillId::Time => self.freeze_enemy(self.rules.config.freeze_turns),
            SkillId::Light => {
                let power = self.player.entity.attack().saturating_mul(3);
                let damage = self.enemy.entity.take_damage(power);
                io.emit(Message::mystic(format!(
                    "A horizontal arc of hope sears {} for {damage} damage!",
                    self.enemy.name()
                )));
            }
            SkillId::Mercy => {
                let power = self.player.entity.attack().saturating_mul(5);
                let damage = self.enemy.entity.take_damage(power);
                io.emit(Message::mystic(format!(
                    "Final Mercy struck for {damage} damage."
                )));
            }
        }
    }
}

/// Prompt until the source returns an index within `options`.
///
/// Returns the 0-based index.
fn choose_index(
    io: &mut dyn CombatIo,
    prompt: &str,
    options: &[String],
) -> Result<usize, EncounterError> {
    loop {
        let picked = io.choose(prompt, options)?;
        match picked.checked_sub(1).filter(|index| *index < options.len()) {
            Some(index) => return Ok(index),
            None => reject(
                io,
                &ActionError::InvalidSelection {
                    index: picked,
                    options: options.len(),
                },
            ),
        }
    }
}

fn reject(io: &mut dyn CombatIo, error: &ActionError) {
    warn!(target: "combat", code = error.error_code(), %error, "action rejected");
    let tone = match error {
        ActionError::EmptySatchel => Tone::Warning,
        _ => Tone::Alert,
    };
    io.emit(Message::new(tone, error.to_string()));
}

fn to_modifier(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
