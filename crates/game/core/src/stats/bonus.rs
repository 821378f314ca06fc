//! Flat bonus stacking for derived stats.
//!
//! Every derived stat is `clamp(base + Σ flat bonuses, min, max)`. Bonuses
//! come from active effects and equipped items; both feed the same stack so
//! the order of contribution never matters.

/// Lower/upper bounds applied after bonuses are summed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBounds {
    pub min: i64,
    pub max: i64,
}

impl StatBounds {
    /// Attack never drops below 1.
    pub const ATTACK: Self = Self {
        min: 1,
        max: u32::MAX as i64,
    };

    /// Defense never drops below 0.
    pub const DEFENSE: Self = Self {
        min: 0,
        max: u32::MAX as i64,
    };

    /// Speed never drops below 1.
    pub const SPEED: Self = Self {
        min: 1,
        max: u32::MAX as i64,
    };
}

/// A collection of flat bonuses applied to one stat.
///
/// # Example
/// ```
/// # use game_core::stats::{BonusStack, StatBounds};
/// let mut stack = BonusStack::new();
/// stack.add(25);  // Power
/// stack.add(-40); // a debuff
///
/// assert_eq!(stack.apply(10, StatBounds::ATTACK), 1);
/// assert_eq!(stack.apply(30, StatBounds::DEFENSE), 15);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BonusStack {
    bonuses: Vec<i32>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    /// Add a bonus to the stack. Zero bonuses are ignored.
    pub fn add(&mut self, bonus: i32) {
        if bonus != 0 {
            self.bonuses.push(bonus);
        }
    }

    /// Sum of every bonus in the stack.
    pub fn total(&self) -> i64 {
        self.bonuses.iter().map(|&b| i64::from(b)).sum()
    }

    /// Apply all bonuses to a base value with clamping.
    pub fn apply(&self, base: u32, bounds: StatBounds) -> u32 {
        let raw = i64::from(base) + self.total();
        raw.clamp(bounds.min, bounds.max) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_returns_base() {
        let stack = BonusStack::new();
        assert_eq!(stack.apply(15, StatBounds::ATTACK), 15);
        assert!(stack.is_empty());
    }

    #[test]
    fn zero_bonus_is_not_recorded() {
        let mut stack = BonusStack::new();
        stack.add(0);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn floors_are_enforced() {
        let mut stack = BonusStack::new();
        stack.add(-100);
        assert_eq!(stack.apply(5, StatBounds::ATTACK), 1);
        assert_eq!(stack.apply(5, StatBounds::DEFENSE), 0);
        assert_eq!(stack.apply(5, StatBounds::SPEED), 1);
    }
}
