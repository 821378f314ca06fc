//! Stat system.
//!
//! ```text
//! [ Base Stats ]  fixed allocation, grows on level-up
//!      ↓
//! [ Bonus Stack ] effect modifiers + equipment bonuses
//!      ↓
//! [ Derived Stats ] clamped effective attack / defense / speed
//! ```
//!
//! Derived values are never stored; they are recomputed on every read so an
//! effect expiring is reflected immediately.

pub mod bonus;
pub mod derived;

pub use bonus::{BonusStack, StatBounds};
pub use derived::{BaseStats, DerivedBonuses, DerivedStats, StatKind};
