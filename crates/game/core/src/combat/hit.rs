//! Dodge chance calculations.

use crate::config::DodgeTuning;

/// Calculate the player's chance to dodge an enemy attack.
///
/// # Formula
///
/// ```text
/// dodge = floor(player_speed * scale / enemy_speed)
/// clamped to [floor, ceiling]
/// ```
///
/// Speeds are effective speeds and are never below 1; a zero enemy speed is
/// still treated as 1.
pub fn dodge_chance(player_speed: u32, enemy_speed: u32, tuning: &DodgeTuning) -> u32 {
    let ratio = u64::from(player_speed) * u64::from(tuning.scale) / u64::from(enemy_speed.max(1));
    let ratio = u32::try_from(ratio).unwrap_or(u32::MAX);

    ratio.clamp(tuning.floor, tuning.ceiling.max(tuning.floor))
}

/// Check a d100 roll (1..=100) against the dodge chance.
///
/// # Returns
///
/// `true` if the attack is dodged.
pub fn check_dodge(dodge_chance: u32, roll: u32) -> bool {
    roll <= dodge_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_speed_is_twenty_percent() {
        assert_eq!(dodge_chance(10, 10, &DodgeTuning::default()), 20);
    }

    #[test]
    fn extremes_clamp() {
        let tuning = DodgeTuning::default();
        assert_eq!(dodge_chance(1000, 1, &tuning), 75);
        assert_eq!(dodge_chance(1, 1000, &tuning), 5);
    }

    #[test]
    fn ratio_is_floored() {
        // 10 * 20 / 12 = 16.67
        assert_eq!(dodge_chance(10, 12, &DodgeTuning::default()), 16);
    }

    #[test]
    fn roll_at_chance_dodges() {
        assert!(check_dodge(20, 20));
        assert!(!check_dodge(20, 21));
    }
}
