//! Damage calculation.

use crate::character::Character;

/// Attack minus defence, using derived totals. May be zero or negative.
pub fn raw_damage(attacker: &Character, defender: &Character) -> i32 {
    attacker.total_attack() - defender.total_defence()
}

/// Health an Orc loses when it defends successfully in daylight.
///
/// # Formula
///
/// ```text
/// penalty = max(0, attack - defence) / 4
/// ```
pub fn orc_day_penalty(attacker: &Character, defender: &Character) -> i32 {
    raw_damage(attacker, defender).max(0) / 4
}
