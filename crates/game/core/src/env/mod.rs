//! Collaborators the rules consult but do not own.
//!
//! Currently this is the random source; everything else the engine needs is
//! handed to it explicitly.
mod rng;

pub use rng::{GameRng, RngOracle, ScriptedRng};
