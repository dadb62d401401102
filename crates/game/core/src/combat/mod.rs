//! Combat resolution.
//!
//! One call to [`resolve_attack`] is one exchange: the attacker swings once and
//! exactly one of miss, successful defence, damage or block happens. All
//! randomness is drawn from a [`Dice`](crate::dice::Dice) so every branch can
//! be replayed with scripted rolls.
//!
//! # Core Functions
//!
//! - `resolve_attack`: complete exchange (attack roll, defence roll, damage)
//! - `attack_lands` / `defence_holds`: roll checks against chances
//! - `raw_damage`: attack minus defence, before clamping
//! - `react_to_defence`: race-specific side effect of a successful defence

pub mod damage;
pub mod defense;
pub mod hit;
pub mod result;

pub use damage::{orc_day_penalty, raw_damage};
pub use defense::{DefenseReaction, react_to_defence};
pub use hit::{attack_lands, defence_holds};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
