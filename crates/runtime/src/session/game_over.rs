//! What happens after a defeat.

use game_core::{CombatIo, Message, RngOracle};
use tracing::info;

use super::camp::CampMode;
use super::GameSession;
use crate::error::Result;
use crate::menu::{labels, select};

/// The player's answer to a defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Fully restored; fight the same wave again.
    Retry,
    /// Saved; leave the session.
    ExitToMenu,
}

const GAME_OVER_MENU: [&str; 3] = [
    "Retry Wave (Full Heal)",
    "Go to Ethereal Camp (Train/Heal)",
    "Save & Exit to Main Menu",
];

impl<R: RngOracle> GameSession<'_, R> {
    /// Show the game-over menu until the player retries or saves.
    ///
    /// A camp detour comes back to this menu when the player leaves camp.
    pub fn game_over(&mut self, io: &mut dyn CombatIo) -> Result<Resolution> {
        self.player.entity.clear_effects();
        info!(target: "runtime", name = %self.player.entity.name, "game over");

        let options = labels(&GAME_OVER_MENU);
        loop {
            io.emit(Message::alert("--- FATE UNRAVELED ---"));
            io.emit(Message::neutral(
                "Your thread has been cut. The Wheel stops, and the world begins to fade \
                 into the violet mist.",
            ));

            match select(io, "Choose your resolution: ", &options)? {
                0 => {
                    self.player.rest();
                    io.emit(Message::success("The Wheel turns back. You stand whole again."));
                    return Ok(Resolution::Retry);
                }
                1 => {
                    self.camp(io, CampMode::Detour)?;
                }
                _ => {
                    if self.save(io).is_ok() {
                        return Ok(Resolution::ExitToMenu);
                    }
                }
            }
        }
    }
}
