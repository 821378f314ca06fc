//! Unified error type surfaced by the runtime.
//!
//! Recoverable gameplay failures never reach this type; they are reported to
//! the player and the menu is shown again. What remains is a lost terminal,
//! a broken repository, or content that cannot serve a request.

use game_core::{EncounterError, InterfaceError, Rank};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Interface(#[from] InterfaceError),

    #[error(transparent)]
    Encounter(#[from] EncounterError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no gate is defined for rank {0}")]
    UnknownGate(Rank),
}

impl RuntimeError {
    /// True when the input stream is gone and the game cannot continue.
    pub fn is_input_closed(&self) -> bool {
        matches!(
            self,
            Self::Interface(InterfaceError::InputClosed)
                | Self::Encounter(EncounterError::Interface(InterfaceError::InputClosed))
        )
    }
}
