//! Static game content and data-file loaders.
//!
//! This crate houses the content a standard game starts from:
//! - The standard item catalog and the starter loot scattered on the board
//! - The default enemy roster
//!
//! With the `loaders` feature it also reads content from data files:
//! - Item catalogs (RON)
//! - Enemy rosters (RON)
//! - Game configuration (TOML)
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod catalog;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{find_item, standard_items, starter_loot};
pub use roster::{EnemySpec, default_enemies, default_roster};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ItemLoader, RosterLoader};
