//! Equipment items.
//!
//! Items are immutable value objects. Each item lives in exactly one place at a
//! time, either a board cell or a character's equipment, and changes hands by
//! move.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the common fields (name, weight)
//! - [`ItemKind`] holds the kind-specific modifiers
//!
//! Stat contributions are exposed per item (`attack_modifier`,
//! `defence_modifier`, ...) so a character's totals are plain sums over what
//! it has equipped.

use std::fmt;

/// An item that can lie on the board or be equipped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub weight: u32,
    pub kind: ItemKind,
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Held in the weapon slot.
    Weapon(WeaponData),

    /// Worn in the armour slot.
    Armor(ArmorData),

    /// Same modifiers as armour, held in its own slot.
    Shield(ArmorData),

    /// Any number may be worn at once.
    Ring(RingData),

    /// Carries no modifiers and cannot be equipped.
    Trinket,
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub attack_bonus: i32,
}

/// Armour and shield data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub defence_bonus: i32,
    pub attack_penalty: i32,
}

/// Ring data. The health delta may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingData {
    pub health_delta: i32,
    pub strength_bonus: i32,
}

/// Coarse item classification, used for display and slot lookup.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Shield,
    Ring,
    Trinket,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Weapon(_) => ItemCategory::Weapon,
            ItemKind::Armor(_) => ItemCategory::Armor,
            ItemKind::Shield(_) => ItemCategory::Shield,
            ItemKind::Ring(_) => ItemCategory::Ring,
            ItemKind::Trinket => ItemCategory::Trinket,
        }
    }
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u32, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            weight,
            kind,
        }
    }

    pub fn weapon(name: impl Into<String>, weight: u32, attack_bonus: i32) -> Self {
        Self::new(name, weight, ItemKind::Weapon(WeaponData { attack_bonus }))
    }

    pub fn armor(
        name: impl Into<String>,
        weight: u32,
        defence_bonus: i32,
        attack_penalty: i32,
    ) -> Self {
        Self::new(
            name,
            weight,
            ItemKind::Armor(ArmorData {
                defence_bonus,
                attack_penalty,
            }),
        )
    }

    pub fn shield(
        name: impl Into<String>,
        weight: u32,
        defence_bonus: i32,
        attack_penalty: i32,
    ) -> Self {
        Self::new(
            name,
            weight,
            ItemKind::Shield(ArmorData {
                defence_bonus,
                attack_penalty,
            }),
        )
    }

    pub fn ring(
        name: impl Into<String>,
        weight: u32,
        health_delta: i32,
        strength_bonus: i32,
    ) -> Self {
        Self::new(
            name,
            weight,
            ItemKind::Ring(RingData {
                health_delta,
                strength_bonus,
            }),
        )
    }

    pub fn trinket(name: impl Into<String>, weight: u32) -> Self {
        Self::new(name, weight, ItemKind::Trinket)
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    /// Contribution to total attack: weapon bonus, armour/shield penalty, or
    /// ring strength bonus.
    pub fn attack_modifier(&self) -> i32 {
        match self.kind {
            ItemKind::Weapon(weapon) => weapon.attack_bonus,
            ItemKind::Armor(armor) | ItemKind::Shield(armor) => -armor.attack_penalty,
            ItemKind::Ring(ring) => ring.strength_bonus,
            ItemKind::Trinket => 0,
        }
    }

    /// Contribution to total defence.
    pub fn defence_modifier(&self) -> i32 {
        match self.kind {
            ItemKind::Armor(armor) | ItemKind::Shield(armor) => armor.defence_bonus,
            _ => 0,
        }
    }

    /// Contribution to total strength (carrying capacity).
    pub fn strength_modifier(&self) -> i32 {
        match self.kind {
            ItemKind::Ring(ring) => ring.strength_bonus,
            _ => 0,
        }
    }

    /// Contribution to the total health ceiling.
    pub fn health_modifier(&self) -> i32 {
        match self.kind {
            ItemKind::Ring(ring) => ring.health_delta,
            _ => 0,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::Weapon(weapon) => write!(
                f,
                "{} (Weapon, Attack +{}, Weight: {})",
                self.name, weapon.attack_bonus, self.weight
            ),
            ItemKind::Armor(armor) => write!(
                f,
                "{} (Armour, Defence +{}, Attack -{}, Weight: {})",
                self.name, armor.defence_bonus, armor.attack_penalty, self.weight
            ),
            ItemKind::Shield(armor) => write!(
                f,
                "{} (Shield, Defence +{}, Attack -{}, Weight: {})",
                self.name, armor.defence_bonus, armor.attack_penalty, self.weight
            ),
            ItemKind::Ring(ring) => write!(
                f,
                "{} (Ring, Health {:+}, Strength +{}, Weight: {})",
                self.name, ring.health_delta, ring.strength_bonus, self.weight
            ),
            ItemKind::Trinket => write!(f, "{} (Weight: {})", self.name, self.weight),
        }
    }
}
