//! Memory Gates: procedurally generated wave ladders.
//!
//! Each gate rank scales a regular and a boss template by a fixed multiplier
//! and by `wave_growth_percent` per wave after the first. Every
//! `boss_every`-th wave is a boss.

use game_core::{BaseStats, Enemy, Rank, RngOracle};
use tracing::debug;

/// Unscaled stats and rewards for one enemy class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    /// Luck does not scale with rank or wave.
    pub luck: u32,
    pub exp: u32,
    pub gold: u32,
}

/// One gate rank.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateSpec {
    pub rank: Rank,
    pub multiplier: u32,
    /// Recommended level band, e.g. `Lv 1-10`.
    pub levels: String,
    pub boss_name: String,
    pub pool: Vec<String>,
}

impl GateSpec {
    /// Menu label, e.g. `F (Lv 1-10)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.rank, self.levels)
    }
}

/// All gates plus the shared scaling rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateCatalog {
    pub boss_every: u32,
    pub wave_growth_percent: u32,
    pub regular: EnemyTemplate,
    pub boss: EnemyTemplate,
    pub gates: Vec<GateSpec>,
}

impl GateCatalog {
    /// Name used when a gate has an empty regular pool.
    pub const FALLBACK_NAME: &'static str = "Rift Echo";

    pub fn gate(&self, rank: Rank) -> Option<&GateSpec> {
        self.gates.iter().find(|gate| gate.rank == rank)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GateSpec> {
        self.gates.iter()
    }

    /// Waves are numbered from 1.
    pub fn is_boss_wave(&self, wave: u32) -> bool {
        self.boss_every > 0 && wave > 0 && wave % self.boss_every == 0
    }

    /// `base * multiplier * (100 + (wave - 1) * growth) / 100`, floored.
    pub fn scale(&self, base: u32, multiplier: u32, wave: u32) -> u32 {
        let growth = 100 + u64::from(wave.saturating_sub(1)) * u64::from(self.wave_growth_percent);
        let scaled = u64::from(base) * u64::from(multiplier) * growth / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }

    /// Build the enemy for `wave` of the `rank` gate.
    ///
    /// Returns `None` for a rank without a gate.
    pub fn spawn<R: RngOracle>(&self, rank: Rank, wave: u32, rng: &mut R) -> Option<Enemy> {
        let gate = self.gate(rank)?;
        let boss = self.is_boss_wave(wave);

        let (template, name) = if boss {
            (&self.boss, gate.boss_name.clone())
        } else {
            let name = rng
                .pick(&gate.pool)
                .cloned()
                .unwrap_or_else(|| Self::FALLBACK_NAME.to_string());
            (&self.regular, name)
        };

        let m = gate.multiplier;
        let base = BaseStats::new(
            self.scale(template.attack, m, wave),
            self.scale(template.defense, m, wave),
            self.scale(template.speed, m, wave).max(1),
            template.luck,
        );
        let max_hp = self.scale(template.hp, m, wave).max(1);

        let mut enemy = Enemy::new(name, max_hp, base, template.exp.saturating_mul(m))
            .with_gold_reward(template.gold.saturating_mul(m))
            .with_rank(rank);
        if boss {
            enemy = enemy.boss();
        }

        debug!(
            target: "gates",
            %rank,
            wave,
            boss,
            name = %enemy.entity.name,
            hp = max_hp,
            "spawned"
        );
        Some(enemy)
    }
}

#[cfg(all(test, feature = "loaders"))]
mod tests {
    use game_core::ScriptedRng;

    use super::*;
    use crate::loaders::GateLoader;

    fn catalog() -> GateCatalog {
        GateLoader::embedded().unwrap()
    }

    #[test]
    fn first_wave_uses_base_stats() {
        let catalog = catalog();
        let mut rng = ScriptedRng::new([0]);
        let enemy = catalog.spawn(Rank::F, 1, &mut rng).unwrap();

        assert_eq!(enemy.entity.name, "Mist Stalker");
        assert_eq!(enemy.entity.hp.maximum, 80);
        assert_eq!(enemy.entity.base, BaseStats::new(12, 5, 12, 5));
        assert_eq!((enemy.exp_reward, enemy.gold_reward), (100, 20));
        assert!(!enemy.is_boss);
    }

    #[test]
    fn waves_grow_ten_percent_floored() {
        let catalog = catalog();
        let mut rng = ScriptedRng::new([3]);
        let enemy = catalog.spawn(Rank::E, 4, &mut rng).unwrap();

        // multiplier 2, growth 130%
        assert_eq!(enemy.entity.name, "Bone-Scribe");
        assert_eq!(enemy.entity.hp.maximum, 208);
        assert_eq!(enemy.entity.base.attack, 31);
        assert_eq!(enemy.entity.base.defense, 13);
        assert_eq!(enemy.entity.base.luck, 5);
        // Rewards scale with rank only.
        assert_eq!((enemy.exp_reward, enemy.gold_reward), (200, 40));
    }

    #[test]
    fn every_fifth_wave_is_the_rank_boss() {
        let catalog = catalog();
        let mut rng = ScriptedRng::new([]);
        let boss = catalog.spawn(Rank::B, 5, &mut rng).unwrap();

        assert!(boss.is_boss);
        assert_eq!(boss.entity.name, "Nihilus, the Unraveler");
        // 200 * 12 * 140%
        assert_eq!(boss.entity.hp.maximum, 3360);
        assert_eq!((boss.exp_reward, boss.gold_reward), (6000, 1200));
        assert!(catalog.is_boss_wave(10));
        assert!(!catalog.is_boss_wave(6));
    }

    #[test]
    fn unknown_rank_spawns_nothing() {
        let mut rng = ScriptedRng::new([]);
        assert!(catalog().spawn(Rank::S, 1, &mut rng).is_none());
    }
}
