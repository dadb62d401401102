//! The game board: a fixed grid of cells.
//!
//! Cells refer to enemies by [`EntityId`]; the characters themselves live in
//! the world's roster. Items on the board are owned by their cell until a
//! character picks them up.

mod error;
mod populate;

pub use error::PopulateError;
pub use populate::Placement;

use crate::ids::{EntityId, Position};
use crate::item::Item;

/// One addressable square of the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub enemy: Option<EntityId>,
    pub item: Option<Item>,
    pub player: Option<EntityId>,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.enemy.is_none() && self.item.is_none() && self.player.is_none()
    }

    /// Glyph used by [`Board::render_rows`]: player, then enemy, then item.
    pub fn glyph(&self) -> char {
        if self.player.is_some() {
            '#'
        } else if self.enemy.is_some() {
            '*'
        } else if self.item.is_some() {
            '+'
        } else {
            ' '
        }
    }
}

/// What a cell holds, without lending out the item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub position: Position,
    pub enemy: Option<EntityId>,
    pub item: Option<Item>,
    pub player: bool,
}

impl CellView {
    pub fn is_empty(&self) -> bool {
        self.enemy.is_none() && self.item.is_none() && !self.player
    }
}

/// Row-major grid of `width` columns by `height` rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Largest number of cells a board may have.
    pub const MAX_CELLS: usize = 1 << 20;

    /// Allocates an empty grid. Both sides must be non-zero and the cell
    /// count at most [`Self::MAX_CELLS`].
    pub fn new(width: usize, height: usize) -> Result<Self, PopulateError> {
        if width == 0 || height == 0 {
            return Err(PopulateError::EmptyBoard { width, height });
        }
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells <= Self::MAX_CELLS)
            .ok_or(PopulateError::TooLarge {
                width,
                height,
                max_cells: Self::MAX_CELLS,
            })?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.width + position.col)
    }

    pub fn at(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|index| &self.cells[index])
    }

    pub fn at_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position).map(|index| &mut self.cells[index])
    }

    /// Every position paired with its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Position::new(index / width, index % width), cell))
    }

    pub fn enemies_remaining(&self) -> usize {
        self.cells.iter().filter(|cell| cell.enemy.is_some()).count()
    }

    /// Enemies still on the board, in row-major order.
    pub fn enemies(&self) -> impl Iterator<Item = (Position, EntityId)> + '_ {
        self.iter()
            .filter_map(|(position, cell)| cell.enemy.map(|id| (position, id)))
    }

    pub fn find_enemy(&self, id: EntityId) -> Option<Position> {
        self.enemies()
            .find_map(|(position, enemy)| (enemy == id).then_some(position))
    }

    /// Cells holding neither an enemy nor an item.
    pub fn free_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.enemy.is_none() && cell.item.is_none())
            .count()
    }

    pub fn cell_view(&self, position: Position) -> Option<CellView> {
        self.at(position).map(|cell| CellView {
            position,
            enemy: cell.enemy,
            item: cell.item.clone(),
            player: cell.player.is_some(),
        })
    }

    /// One string per row, each cell drawn as `|g|`.
    pub fn render_rows(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|cell| format!("|{}|", cell.glyph()))
                    .collect()
            })
            .collect()
    }
}
