//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during play: the saved character.
//! Static game content (skills, items, gates) is handled by `game-content`,
//! not Repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::MemorySaveRepository;
pub use traits::{SaveRepository, slot_key};
