//! Terminal frontend for the Wheel of Fate.
//!
//! Provides [`TerminalIo`], a line-based host implementing the core's
//! `MessageSink` and `ChoiceSource`, plus the client's logging setup.
//! Game flow lives in `runtime`; this crate only renders and reads.

mod config;
pub mod logging;
pub mod presentation;

pub use config::CliConfig;
pub use presentation::{TerminalIo, Theme};
