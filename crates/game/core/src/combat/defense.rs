//! Race reactions to a successful defence.
//!
//! Each race has exactly one reaction, selected by an exhaustive match:
//!
//! | Race | Reaction |
//! |---|---|
//! | Human, Dwarf | none |
//! | Elf | heals 1 |
//! | Hobbit | stumbles, losing 0..=5 |
//! | Orc (day) | loses a quarter of the positive attack/defence difference |
//! | Orc (night) | heals 1 |
//!
//! Heals stop at the health ceiling and losses stop at zero.

use crate::character::{Character, Race};
use crate::clock::TimeOfDay;
use crate::dice::Dice;

use super::damage::orc_day_penalty;

/// Largest amount a Hobbit can lose to a stumble.
pub const HOBBIT_STUMBLE_MAX: u32 = 5;

/// Health healed by Elves and by Orcs at night.
pub const DEFENCE_HEAL: i32 = 1;

/// Side effect of a successful defence on the defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefenseReaction {
    /// No change.
    Held,
    /// Health gained, after clamping to the ceiling.
    Recovered { amount: i32 },
    /// Health lost, after clamping at zero.
    Wounded { amount: i32 },
}

/// Applies the defender's race reaction and reports what changed.
pub fn react_to_defence(
    attacker: &Character,
    defender: &mut Character,
    dice: &mut (impl Dice + ?Sized),
) -> DefenseReaction {
    let reaction = match defender.race() {
        Race::Human | Race::Dwarf => DefenseReaction::Held,
        Race::Elf => DefenseReaction::Recovered {
            amount: defender.heal(DEFENCE_HEAL),
        },
        Race::Hobbit => {
            let stumble = dice.range(0, HOBBIT_STUMBLE_MAX) as i32;
            DefenseReaction::Wounded {
                amount: defender.take_damage(stumble),
            }
        }
        Race::Orc => match defender.time_of_day().unwrap_or_default() {
            TimeOfDay::Day => {
                let penalty = orc_day_penalty(attacker, defender);
                DefenseReaction::Wounded {
                    amount: defender.take_damage(penalty),
                }
            }
            TimeOfDay::Night => DefenseReaction::Recovered {
                amount: defender.heal(DEFENCE_HEAL),
            },
        },
    };

    tracing::debug!(
        defender = %defender.name(),
        race = %defender.race(),
        ?reaction,
        health = defender.current_health(),
        "defence reaction"
    );

    reaction
}
