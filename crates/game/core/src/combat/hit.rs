//! Roll checks.
//!
//! Rolls and chances are both in `[0, 1]`. The two checks use different
//! comparisons: an attack lands when the roll does not exceed the chance,
//! a defence holds only when the roll is strictly below it.

/// True if an attack roll succeeds against `attack_chance`.
///
/// A chance of 1 always lands; a chance of 0 lands only on a roll of exactly 0.
pub fn attack_lands(roll: f32, attack_chance: f32) -> bool {
    roll <= attack_chance
}

/// True if a defence roll succeeds against `defence_chance`.
pub fn defence_holds(roll: f32, defence_chance: f32) -> bool {
    roll < defence_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert!(attack_lands(0.5, 0.5));
        assert!(!attack_lands(0.51, 0.5));
        assert!(attack_lands(0.999, 1.0));

        assert!(!defence_holds(0.25, 0.25));
        assert!(defence_holds(0.24, 0.25));
        assert!(!defence_holds(0.0, 0.0));
    }
}
