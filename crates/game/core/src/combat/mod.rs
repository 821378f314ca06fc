//! Combat resolution formulas.
//!
//! Pure functions only: the entity model and the combat session call these
//! to turn stats into numbers. Nothing here touches HP directly.
//!
//! # Core Functions
//!
//! - `calculate_damage`: quadratic attack/defense mitigation with a floor
//! - `dodge_chance`: speed ratio mapped to a clamped percentage
//! - `check_dodge`: compare a d100 roll against the dodge chance
//! - `reflected_damage`: Fate Reversal backlash

pub mod damage;
pub mod hit;

pub use damage::{apply_damage, calculate_damage, minimum_damage, reflected_damage};
pub use hit::{check_dodge, dodge_chance};
