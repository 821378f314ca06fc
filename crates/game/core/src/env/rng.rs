//! RNG oracle for dodge rolls, wheel spins and reward draws.
//!
//! The engine never reaches for a global generator. Every random decision
//! goes through [`RngOracle`], so a session can be driven by the process-wide
//! [`GameRng`] in play and by a [`ScriptedRng`] in tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness consumed by the combat rules.
pub trait RngOracle {
    /// Returns a value in `0..n`. Returns 0 when `n` is 0.
    fn next_below(&mut self, n: u32) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Common for percentage-based mechanics like dodge chance.
    fn roll_d100(&mut self) -> u32 {
        self.next_below(100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + self.next_below(max - min + 1)
    }

    /// Pick an index with probability proportional to its weight.
    ///
    /// Weights are relative likelihoods and are not normalised. Returns
    /// `None` only when every weight is zero.
    fn weighted_index(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }

        let mut roll = self.next_below(total);
        for (index, &weight) in weights.iter().enumerate() {
            if roll < weight {
                return Some(index);
            }
            roll -= weight;
        }
        None
    }

    /// Choose a random element from a slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_below(items.len() as u32) as usize)
    }
}

/// Process-wide game random number generator.
///
/// Wraps `StdRng`. Reproducibility is not required in play; the seeded
/// constructor exists for tests and debugging.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a new RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngOracle for GameRng {
    fn next_below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

/// Lend an oracle without giving it up.
impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_below(&mut self, n: u32) -> u32 {
        (**self).next_below(n)
    }
}

/// Deterministic oracle replaying a fixed script of raw draws.
///
/// Each call to [`RngOracle::next_below`] pops the next scripted value and
/// reduces it modulo `n`. Once the script is exhausted every draw yields
/// `fallback`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    script: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedRng {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: 0,
        }
    }

    /// Value used after the script runs out.
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Remaining scripted draws.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RngOracle for ScriptedRng {
    fn next_below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.script.pop_front().unwrap_or(self.fallback) % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_below_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            assert!(rng.next_below(10) < 10);
        }
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn d100_is_one_based() {
        let mut rng = ScriptedRng::new([0, 99]);
        assert_eq!(rng.roll_d100(), 1);
        assert_eq!(rng.roll_d100(), 100);
    }

    #[test]
    fn range_inclusive_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let value = rng.range_inclusive(1, 2);
            assert!((1..=2).contains(&value));
        }
        assert_eq!(rng.range_inclusive(5, 5), 5);
    }

    #[test]
    fn weighted_index_walks_cumulative_weights() {
        // total = 10; draws land in [0,3), [3,8), [8,10)
        let weights = [3, 5, 2];
        let mut rng = ScriptedRng::new([0, 2, 3, 7, 8, 9]);
        let picks: Vec<_> = (0..6)
            .map(|_| rng.weighted_index(&weights).unwrap())
            .collect();
        assert_eq!(picks, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn weighted_index_skips_zero_weights() {
        let mut rng = ScriptedRng::new([0]);
        assert_eq!(rng.weighted_index(&[0, 0, 4]), Some(2));
        assert_eq!(rng.weighted_index(&[0, 0]), None);
    }

    #[test]
    fn scripted_rng_uses_fallback_when_exhausted() {
        let mut rng = ScriptedRng::new([4]).with_fallback(1);
        assert_eq!(rng.next_below(10), 4);
        assert_eq!(rng.next_below(10), 1);
        assert_eq!(rng.remaining(), 0);
    }
}
