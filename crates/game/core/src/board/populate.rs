//! Random placement of enemies and items.
//!
//! Enemies go first, each on a cell without an enemy. Items follow, each on a
//! cell holding neither an enemy nor an item. Enemy placement does not avoid
//! cells that will later receive items; the order is part of the contract.
//!
//! Draws are retried until a suitable cell comes up, so capacity is checked
//! before anything is placed.

use crate::dice::{Dice, RngDice};
use crate::ids::{EntityId, Position};
use crate::item::Item;

use super::{Board, PopulateError};

/// Where each occupant ended up, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub enemies: Vec<(EntityId, Position)>,
    pub items: Vec<Position>,
}

impl Board {
    /// Populates the board with dice freshly seeded from the wall clock.
    pub fn populate(
        &mut self,
        enemies: &[EntityId],
        items: Vec<Item>,
    ) -> Result<Placement, PopulateError> {
        self.populate_with(enemies, items, &mut RngDice::from_clock())
    }

    /// Populates the board drawing every coordinate from `dice`.
    ///
    /// Fails without touching the board if there are fewer free cells than
    /// enemies and items combined.
    pub fn populate_with(
        &mut self,
        enemies: &[EntityId],
        items: Vec<Item>,
        dice: &mut (impl Dice + ?Sized),
    ) -> Result<Placement, PopulateError> {
        let required = enemies.len() + items.len();
        let free_cells = self.free_cells();
        if free_cells < required {
            tracing::warn!(free_cells, required, "board too small to populate");
            return Err(PopulateError::InsufficientCapacity {
                free_cells,
                required,
            });
        }

        let mut placement = Placement::default();

        for &enemy in enemies {
            let position = self.draw_until(dice, |board, position| {
                board
                    .at(position)
                    .is_some_and(|cell| cell.enemy.is_none())
            });
            if let Some(cell) = self.at_mut(position) {
                cell.enemy = Some(enemy);
            }
            placement.enemies.push((enemy, position));
        }

        for item in items {
            let position = self.draw_until(dice, |board, position| {
                board
                    .at(position)
                    .is_some_and(|cell| cell.enemy.is_none() && cell.item.is_none())
            });
            if let Some(cell) = self.at_mut(position) {
                cell.item = Some(item);
            }
            placement.items.push(position);
        }

        tracing::info!(
            enemies = placement.enemies.len(),
            items = placement.items.len(),
            width = self.width,
            height = self.height,
            "board populated"
        );

        Ok(placement)
    }

    /// Draws row then column until `accept` holds.
    fn draw_until(
        &self,
        dice: &mut (impl Dice + ?Sized),
        accept: impl Fn(&Self, Position) -> bool,
    ) -> Position {
        // Both sides are at most `MAX_CELLS`, well inside `u32`.
        loop {
            let row = dice.below(self.height as u32) as usize;
            let col = dice.below(self.width as u32) as usize;
            let position = Position::new(row, col);
            if accept(self, position) {
                return position;
            }
        }
    }
}
