//! Combat rules and data types shared by every client.
//!
//! `game-core` defines the combatant model, the effect registry, the Wheel,
//! the round state machine and player progression. It never touches the
//! terminal or the filesystem: text goes out through [`io::MessageSink`],
//! selections come in through [`io::ChoiceSource`], and randomness through
//! [`env::RngOracle`]. Everything else is plain data that the runtime
//! persists between encounters.
//!
//! The single entry point for a fight is [`engine::run_encounter`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod io;
pub mod progression;
pub mod state;
pub mod stats;
pub mod wheel;

pub use config::{DodgeTuning, GameConfig, StoneRange};
pub use engine::{
    ActionError, ActionOutcome, CombatSession, EncounterError, EncounterReport, EncounterResult,
    EnemyStrike, PlayerAction, Rewards, RoundPhase, Rules, run_encounter,
};
pub use env::{GameRng, RngOracle, ScriptedRng};
pub use error::{ErrorKind, ErrorSeverity, GameError};
pub use io::{
    ChoiceSource, CombatIo, InterfaceError, Message, MessageSink, Pacing, RoundStatus,
    ScriptedIo, Tone,
};
pub use progression::{ItemUse, LevelUp, ProgressionError};
pub use state::{
    Combatant, Effect, Enemy, Entity, Equipment, EquipmentItem, EquipmentSlot, InventoryState,
    ItemId, ItemKind, ItemStack, Player, Rank, ResourceMeter, Skill, SkillCatalog, SkillId,
    SkillUnlock, StatusEffects, StatusEntry,
};
pub use stats::{BaseStats, DerivedStats, StatKind};
pub use wheel::{Wheel, WheelOutcome, WheelReport};
