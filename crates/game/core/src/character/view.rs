//! Read-only snapshots for display.

use std::fmt;

use crate::clock::TimeOfDay;
use crate::item::Item;

use super::Race;

/// Totals a shell needs to print a character sheet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLine {
    pub name: String,
    pub race: Race,
    pub attack: i32,
    pub attack_chance: f32,
    pub defence: i32,
    pub defence_chance: f32,
    /// Health ceiling.
    pub health: i32,
    pub current_health: i32,
    pub strength: i32,
    pub weight: i64,
    pub time_of_day: Option<TimeOfDay>,
}

impl fmt::Display for StatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} the {}: Attack {}, Defence {}, Health {}/{}, Strength {} (carrying {})",
            self.name,
            self.race,
            self.attack,
            self.defence,
            self.current_health,
            self.health,
            self.strength,
            self.weight
        )?;
        if let Some(time) = self.time_of_day {
            write!(f, " [{time}]")?;
        }
        Ok(())
    }
}

/// Equipped items, slot by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryView {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub shield: Option<Item>,
    pub rings: Vec<Item>,
}

impl InventoryView {
    /// The inventory list proper: everything except the weapon.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.armor
            .iter()
            .chain(self.shield.iter())
            .chain(self.rings.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.weapon.is_none() && self.items().next().is_none()
    }
}
