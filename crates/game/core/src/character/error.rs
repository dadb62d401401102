//! Equipment errors.
//!
//! Pickup and drop failures are signals, not faults: the item stays where it
//! was and the caller decides what to tell the player.

use crate::error::{ErrorSeverity, GameError};

use super::EquipSlot;

// ============================================================================
// Pickup Errors
// ============================================================================

/// Errors raised by [`Character::pick_up`](super::Character::pick_up).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    /// Equipping the item would exceed the character's strength.
    #[error("{item} is too heavy: carrying {carried} of {capacity}, item weighs {weight}")]
    TooHeavy {
        item: String,
        weight: u32,
        carried: i64,
        capacity: i64,
    },

    /// The item has no equipment slot.
    #[error("{item} cannot be equipped")]
    NotEquippable { item: String },

    /// There was no item to pick up.
    #[error("Nothing to pick up")]
    NothingToPickUp,
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TooHeavy { .. } | Self::NothingToPickUp => ErrorSeverity::Recoverable,
            Self::NotEquippable { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooHeavy { .. } => "EQUIP_TOO_HEAVY",
            Self::NotEquippable { .. } => "EQUIP_NOT_EQUIPPABLE",
            Self::NothingToPickUp => "EQUIP_NOTHING_TO_PICK_UP",
        }
    }
}

// ============================================================================
// Drop Errors
// ============================================================================

/// Errors raised by the `drop_*` operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropError {
    #[error("No {slot} equipped")]
    NothingEquipped { slot: EquipSlot },

    /// `index` is 0-based; `count` is the number of rings worn.
    #[error("Ring index {index} out of range ({count} worn)")]
    RingIndexOutOfRange { index: usize, count: usize },
}

impl GameError for DropError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NothingEquipped { .. } => ErrorSeverity::Recoverable,
            Self::RingIndexOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NothingEquipped { .. } => "DROP_NOTHING_EQUIPPED",
            Self::RingIndexOutOfRange { .. } => "DROP_RING_INDEX_OUT_OF_RANGE",
        }
    }
}
