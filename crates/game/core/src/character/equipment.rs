//! Equipment slots held by a character.
//!
//! Weapon, armour and shield are single slots; rings form an ordered,
//! unbounded list. Each slot owns its item outright.

use crate::item::{Item, ItemKind};

/// Equipment attachment point.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Shield,
    Ring,
}

impl EquipSlot {
    /// Slot an item would occupy, or `None` if it cannot be equipped.
    pub fn for_item(item: &Item) -> Option<Self> {
        match item.kind {
            ItemKind::Weapon(_) => Some(Self::Weapon),
            ItemKind::Armor(_) => Some(Self::Armor),
            ItemKind::Shield(_) => Some(Self::Shield),
            ItemKind::Ring(_) => Some(Self::Ring),
            ItemKind::Trinket => None,
        }
    }
}

/// Items a character has equipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub shield: Option<Item>,
    pub rings: Vec<Item>,
}

impl Equipment {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips a weapon, returning the previously equipped weapon if any.
    pub fn equip_weapon(&mut self, item: Item) -> Option<Item> {
        self.weapon.replace(item)
    }

    pub fn unequip_weapon(&mut self) -> Option<Item> {
        self.weapon.take()
    }

    /// Equips armour, returning the previously worn armour if any.
    pub fn equip_armor(&mut self, item: Item) -> Option<Item> {
        self.armor.replace(item)
    }

    pub fn unequip_armor(&mut self) -> Option<Item> {
        self.armor.take()
    }

    /// Equips a shield, returning the previously held shield if any.
    pub fn equip_shield(&mut self, item: Item) -> Option<Item> {
        self.shield.replace(item)
    }

    pub fn unequip_shield(&mut self) -> Option<Item> {
        self.shield.take()
    }

    pub fn add_ring(&mut self, item: Item) {
        self.rings.push(item);
    }

    /// Removes the ring at `index`, preserving the order of the rest.
    pub fn remove_ring(&mut self, index: usize) -> Option<Item> {
        (index < self.rings.len()).then(|| self.rings.remove(index))
    }

    /// Every equipped item, weapon first, then armour, shield and rings.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.weapon
            .iter()
            .chain(self.armor.iter())
            .chain(self.shield.iter())
            .chain(self.rings.iter())
    }

    /// Sum of the weights of everything equipped.
    pub fn weight(&self) -> i64 {
        self.iter().map(|item| i64::from(item.weight)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
