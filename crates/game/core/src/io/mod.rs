//! Interfaces the combat core consumes from its host.
//!
//! The core needs exactly two collaborators: somewhere to put lines of text
//! and somewhere to get menu selections. Both are blocking; there is no
//! timeout, the engine waits until a valid selection arrives.
//!
//! # Implementations
//!
//! - `TerminalIo` in `client-frontend-cli`: styled stdout + numbered menus
//! - `ScriptedIo` in this module: canned selections, captured output (tests)
mod message;

use std::collections::VecDeque;

pub use message::{Message, Pacing, Tone};

use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::state::StatusEntry;

/// Failure of an external I/O collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InterfaceError {
    /// The input stream ended while a selection was pending.
    #[error("input closed while waiting for a selection")]
    InputClosed,

    /// The underlying terminal or stream failed.
    #[error("I/O failure: {0}")]
    Io(String),
}

impl GameError for InterfaceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Interface
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InputClosed => "INTERFACE_INPUT_CLOSED",
            Self::Io(_) => "INTERFACE_IO",
        }
    }
}

impl From<std::io::Error> for InterfaceError {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::InputClosed
        } else {
            Self::Io(error.to_string())
        }
    }
}

/// Snapshot of both combatants shown before every player decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundStatus {
    pub round: u32,
    pub player_name: String,
    pub player_hp: (u32, u32),
    pub player_mp: (u32, u32),
    pub dodge_chance: u32,
    pub player_effects: Vec<StatusEntry>,
    pub enemy_name: String,
    pub enemy_hp: (u32, u32),
    pub enemy_effects: Vec<StatusEntry>,
}

impl RoundStatus {
    /// Bracketed effect list, e.g. `[Power x2] [Guard]`.
    pub fn effect_tags(entries: &[StatusEntry]) -> String {
        entries
            .iter()
            .map(|entry| format!("[{entry}]"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Line-output sink for narrative and status messages.
pub trait MessageSink {
    /// Publish a single message.
    fn emit(&mut self, message: Message);

    /// Cosmetic delay between phases. Hosts without pacing ignore it.
    fn pause(&mut self, _pacing: Pacing) {}

    /// Publish the per-round status block.
    ///
    /// The default renders two neutral lines; terminal hosts override it to
    /// color the meters.
    fn show_status(&mut self, status: &RoundStatus) {
        let (hp, max_hp) = status.player_hp;
        let (mp, max_mp) = status.player_mp;
        self.emit(Message::neutral(format!(
            "{} [HP: {hp}/{max_hp}] [MP: {mp}/{max_mp}] [Dodge: {}%] {}",
            status.player_name,
            status.dodge_chance,
            RoundStatus::effect_tags(&status.player_effects),
        )));
        let (enemy_hp, enemy_max) = status.enemy_hp;
        self.emit(Message::neutral(format!(
            "{} [HP: {enemy_hp}/{enemy_max}] {}",
            status.enemy_name,
            RoundStatus::effect_tags(&status.enemy_effects),
        )));
    }
}

/// Blocking choice-input source.
pub trait ChoiceSource {
    /// Present `options` and return the **1-based** index of the selection.
    ///
    /// Implementations may return an out-of-range index; callers re-prompt.
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize, InterfaceError>;
}

/// Everything an encounter needs from its host.
pub trait CombatIo: MessageSink + ChoiceSource {}

impl<T: MessageSink + ChoiceSource + ?Sized> CombatIo for T {}

/// Scripted host: replays queued selections and records every message.
///
/// Running out of selections reports [`InterfaceError::InputClosed`], which
/// is exactly what a closed terminal would do.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIo {
    choices: VecDeque<usize>,
    pub messages: Vec<Message>,
    pub prompts: Vec<(String, Vec<String>)>,
    pub statuses: Vec<RoundStatus>,
}

impl ScriptedIo {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            ..Self::default()
        }
    }

    /// True if any recorded message contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.text.contains(needle))
    }

    /// Selections not consumed yet.
    pub fn pending_choices(&self) -> usize {
        self.choices.len()
    }
}

impl MessageSink for ScriptedIo {
    fn emit(&mut self, message: Message) {
        self.messages.push(message);
    }

    fn show_status(&mut self, status: &RoundStatus) {
        self.statuses.push(status.clone());
    }
}

impl ChoiceSource for ScriptedIo {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize, InterfaceError> {
        self.prompts.push((prompt.to_string(), options.to_vec()));
        self.choices.pop_front().ok_or(InterfaceError::InputClosed)
    }
}
