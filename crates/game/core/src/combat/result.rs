//! Combat result types and attack resolution.

use crate::character::Character;
use crate::dice::Dice;

use super::damage::raw_damage;
use super::defense::{DefenseReaction, react_to_defence};
use super::hit::{attack_lands, defence_holds};

/// What happened in one exchange. Exactly one per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The attack roll failed.
    Missed,
    /// The defence roll succeeded and the defender's race reacted.
    Defended(DefenseReaction),
    /// Attack did not exceed defence.
    Blocked,
    /// Health actually removed from the defender, including any excess
    /// above a lowered health ceiling.
    Damaged { amount: i32 },
}

/// Result of a combat resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Defender's current health after the exchange.
    pub defender_health: i32,

    /// Whether the defender is defeated. Removing it is the caller's job.
    pub defeated: bool,
}

/// Resolve a single attack exchange.
///
/// 1. Attack roll: a roll above the attacker's attack chance misses.
/// 2. Defence roll: a roll below the defender's defence chance triggers the
///    defender's race reaction and skips damage.
/// 3. Otherwise the defender loses `attack - defence` if positive, then has its
///    health pulled back under its ceiling; or the attack is blocked.
///
/// A miss, a block and a plain held defence leave the defender untouched.
pub fn resolve_attack(
    attacker: &Character,
    defender: &mut Character,
    dice: &mut (impl Dice + ?Sized),
) -> AttackResult {
    let outcome = exchange(attacker, defender, dice);

    let result = AttackResult {
        outcome,
        defender_health: defender.current_health(),
        defeated: defender.is_defeated(),
    };

    tracing::debug!(
        attacker = %attacker.name(),
        defender = %defender.name(),
        ?outcome,
        health = result.defender_health,
        defeated = result.defeated,
        "attack resolved"
    );

    result
}

fn exchange(
    attacker: &Character,
    defender: &mut Character,
    dice: &mut (impl Dice + ?Sized),
) -> AttackOutcome {
    if !attack_lands(dice.unit(), attacker.attack_chance()) {
        return AttackOutcome::Missed;
    }

    if defence_holds(dice.unit(), defender.defence_chance()) {
        return AttackOutcome::Defended(react_to_defence(attacker, defender, dice));
    }

    let raw = raw_damage(attacker, defender);
    if raw <= 0 {
        return AttackOutcome::Blocked;
    }

    let before = defender.current_health();
    defender.take_damage(raw);
    defender.clamp_health();
    AttackOutcome::Damaged {
        amount: before - defender.current_health(),
    }
}
