//! Everything between encounters.
//!
//! This crate wires content, persistence and the combat core into a playable
//! loop. Consumers load a [`game_content::Content`] bundle, pick a
//! [`SaveRepository`], and hand a character to a [`GameSession`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the camp hub, gate ladders, alchemy and the game-over menu
//! - [`repository`] persists characters between runs
//! - [`config`] resolves directories from the environment
//! - [`menu`] provides the numbered-menu helper every screen uses
pub mod config;
pub mod error;
pub mod menu;
pub mod repository;
pub mod session;

pub use config::{RuntimeConfig, default_log_dir, default_save_dir};
pub use error::{Result, RuntimeError};
pub use repository::{
    FileSaveRepository, MemorySaveRepository, RepositoryError, SaveRepository, slot_key,
};
pub use session::{CampAction, CampMode, Flow, GameSession, Resolution};
