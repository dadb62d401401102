//! Rules of the grid adventure.
//!
//! `game-core` defines items, characters and their races, combat resolution,
//! the day/night clock, board population and the turn engine. It is pure and
//! synchronous: no I/O, and every random draw goes through a [`Dice`] the
//! caller supplies. Shells drive a game through [`GameWorld::execute`] and
//! render the returned [`TurnReport`].
pub mod board;
pub mod character;
pub mod clock;
pub mod combat;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod ids;
pub mod item;

pub use board::{Board, Cell, CellView, Placement, PopulateError};
pub use character::{
    BaseStats, Character, CombatProfile, DropError, DropTarget, EquipError, EquipSlot, Equipment,
    InventoryView, ORC_DAY, ORC_NIGHT, PickedUp, Race, StatLine,
};
pub use clock::{DayNightCycle, TimeOfDay};
pub use combat::{AttackOutcome, AttackResult, DefenseReaction, resolve_attack};
pub use config::GameConfig;
pub use dice::{Dice, RngDice, ScriptedDice};
pub use engine::{
    Command, CommandError, GameStatus, GameWorld, ParseCommandError, TurnEvent, TurnReport,
    parse_script,
};
pub use error::{ErrorSeverity, GameError};
pub use ids::{Direction, EntityId, Position};
pub use item::{ArmorData, Item, ItemCategory, ItemKind, RingData, WeaponData};
