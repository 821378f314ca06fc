//! One loaded character between the main menu and "Save & exit".
//!
//! [`GameSession`] owns the player and drives the camp hub. Encounters are
//! delegated to [`game_core::run_encounter`]; everything around them (gate
//! waves, the game-over menu, alchemy, saving) lives here. Screens are
//! split across files as `impl GameSession` blocks.

mod alchemy;
mod camp;
mod game_over;
mod gates;

pub use camp::{CampAction, CampMode};
pub use game_over::Resolution;

use game_content::Content;
use game_core::{CombatIo, Message, Player, RngOracle, Rules};
use tracing::{info, warn};

use crate::error::Result;
use crate::repository::{RepositoryError, SaveRepository};

/// How a screen handed control back to its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Return to the previous screen.
    Back,
    /// The game was saved; leave the session.
    ExitToMenu,
}

/// A character in play.
pub struct GameSession<'a, R> {
    player: Player,
    content: &'a Content,
    rules: Rules,
    saves: &'a dyn SaveRepository,
    rng: R,
}

impl<'a, R: RngOracle> GameSession<'a, R> {
    pub fn new(player: Player, content: &'a Content, saves: &'a dyn SaveRepository, rng: R) -> Self {
        Self {
            player,
            rules: content.rules(),
            content,
            saves,
            rng,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn into_player(self) -> Player {
        self.player
    }

    /// Play until the player saves and exits.
    pub fn run(&mut self, io: &mut dyn CombatIo) -> Result<()> {
        info!(
            target: "runtime",
            name = %self.player.entity.name,
            level = self.player.level,
            "session started"
        );
        while self.camp(io, CampMode::Hub)? != Flow::ExitToMenu {}
        info!(target: "runtime", name = %self.player.entity.name, "session ended");
        Ok(())
    }

    /// Persist the character, telling the player how it went.
    fn save(&mut self, io: &mut dyn CombatIo) -> std::result::Result<(), RepositoryError> {
        match self.saves.save(&self.player) {
            Ok(()) => {
                io.emit(Message::info("Progress saved. Returning to rift currents..."));
                Ok(())
            }
            Err(error) => {
                warn!(target: "runtime", %error, "save failed");
                io.emit(Message::alert(format!("The thread could not be recorded: {error}")));
                Err(error)
            }
        }
    }
}
