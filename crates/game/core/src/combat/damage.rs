//! Damage calculation and application.

use crate::config::GameConfig;

/// Floor for any hit: a tenth of the attacker's attack, never below one.
pub fn minimum_damage(attack: u32) -> u32 {
    (attack / GameConfig::MIN_DAMAGE_DIVISOR).max(1)
}

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// raw   = attack² / max(1, attack + defense)
/// final = max(raw, max(1, attack / 10))
/// ```
///
/// Computed in 64-bit so large skill multipliers cannot overflow.
pub fn calculate_damage(attack: u32, defense: u32) -> u32 {
    let attack_wide = u64::from(attack);
    let denominator = (attack_wide + u64::from(defense)).max(1);
    let raw = attack_wide * attack_wide / denominator;
    let raw = u32::try_from(raw).unwrap_or(u32::MAX);

    raw.max(minimum_damage(attack))
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Damage returned to the attacker while Fate Reversal is armed.
///
/// `floor(taken * percent / 100) + attacker_defense`. The attacker's own
/// defense is added rather than subtracted: reflected power is not mitigated.
pub fn reflected_damage(taken: u32, percent: u32, attacker_defense: u32) -> u32 {
    let share = u64::from(taken) * u64::from(percent) / 100;
    u32::try_from(share)
        .unwrap_or(u32::MAX)
        .saturating_add(attacker_defense)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_player_against_regular_enemy() {
        // 15² / (15 + 5) = 11.25
        assert_eq!(calculate_damage(15, 5), 11);
    }

    #[test]
    fn heavy_armor_hits_the_floor() {
        // 20² / 1020 = 0, floor is 20 / 10 = 2
        assert_eq!(calculate_damage(20, 1000), 2);
        // 3 / 10 = 0, floor is still 1
        assert_eq!(calculate_damage(3, 1000), 1);
    }

    #[test]
    fn zero_attack_zero_defense_does_not_divide_by_zero() {
        assert_eq!(calculate_damage(0, 0), 1);
    }

    #[test]
    fn skill_multipliers_do_not_overflow() {
        let attack = u32::MAX / 2;
        assert!(calculate_damage(attack, 0) >= minimum_damage(attack));
    }

    #[test]
    fn reflection_adds_attacker_defense() {
        assert_eq!(reflected_damage(11, 50, 5), 10);
        assert_eq!(reflected_damage(0, 50, 7), 7);
    }

    #[test]
    fn apply_damage_clamps_to_zero() {
        assert_eq!(apply_damage(5, 12), 0);
        assert_eq!(apply_damage(50, 12), 38);
    }
}
