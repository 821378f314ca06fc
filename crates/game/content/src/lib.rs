//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Skill unlock catalog (data-driven via RON)
//! - Starting satchel (data-driven via RON)
//! - Memory Gate ranks, enemy templates and name pools (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Default copies of every file are embedded at compile time, so a data
//! directory only needs the files it overrides.

pub mod gates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use gates::{EnemyTemplate, GateCatalog, GateSpec};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, Content, ContentFactory, GateLoader, ItemLoader, LoadResult, SkillLoader,
};
