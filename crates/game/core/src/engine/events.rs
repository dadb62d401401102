//! Turn reports.
//!
//! The engine never prints. Everything a shell might want to show is returned
//! as a [`TurnEvent`], in the order it happened.

use crate::board::CellView;
use crate::character::{DropError, EquipError, EquipSlot, InventoryView, StatLine};
use crate::clock::TimeOfDay;
use crate::combat::AttackResult;
use crate::ids::{Direction, EntityId, Position};
use crate::item::Item;

use super::Command;

/// Whether the game is still running.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// Every enemy has been defeated.
    Won,
    /// The player has been defeated.
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Something that happened while executing a command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    Moved {
        direction: Direction,
        from: Position,
        to: Position,
    },
    /// The move would have left the board; the player stays put.
    EdgeReached { direction: Direction },
    EnemySpotted { enemy: EntityId, stats: StatLine },
    ItemSpotted { item: Item },

    PickedUp {
        item: String,
        slot: EquipSlot,
        /// Former occupant of the slot, now gone from the game.
        discarded: Option<Item>,
    },
    /// The item, if any, stays on the cell.
    PickupRejected { error: EquipError },

    Attack {
        attacker: EntityId,
        defender: EntityId,
        result: AttackResult,
    },
    NoEnemyHere,
    EnemyDefeated {
        enemy: EntityId,
        name: String,
        gold: u32,
    },

    Dropped { item: Item },
    DropRejected { error: DropError },

    Looked { cell: CellView },
    InventoryChecked { inventory: InventoryView, gold: u32 },

    /// The clock changed phase; `orcs` characters were retuned.
    TimeChanged { time: TimeOfDay, orcs: usize },

    Victory,
    PlayerDefeated,
}

/// Everything one command produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub command: Command,
    pub events: Vec<TurnEvent>,
    pub status: GameStatus,
    pub time_of_day: TimeOfDay,
    pub player_position: Position,
}

impl TurnReport {
    /// Attack results in the order they were resolved.
    pub fn attacks(&self) -> impl Iterator<Item = &AttackResult> {
        self.events.iter().filter_map(|event| match event {
            TurnEvent::Attack { result, .. } => Some(result),
            _ => None,
        })
    }

    pub fn time_changed(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, TurnEvent::TimeChanged { .. }))
    }
}
