#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use hints::*;
pub use history::*;
pub use types::*;

pub use command::Command;
pub use select::DragSelection;

mod cell;
mod command;
mod engine;
mod error;
mod generator;
mod hints;
mod history;
mod select;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new((size_x, size_y): Coord2) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        Self::new_unchecked((size_x, size_y))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// The hidden truth grid: `true` means the cell belongs to the picture. Any
/// mask of the declared shape is accepted; nothing checks that the resulting
/// puzzle is solvable without guessing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    mask: Array2<bool>,
    filled_count: CellCount,
}

impl Solution {
    pub fn from_mask(mask: Array2<bool>) -> Self {
        let filled_count = mask
            .iter()
            .filter(|&&filled| filled)
            .count()
            .try_into()
            .unwrap();
        Self { mask, filled_count }
    }

    pub fn from_filled_coords(size: Coord2, filled: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in filled {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mask(mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig { size: self.size() }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mask.len().try_into().unwrap()
    }

    pub fn filled_count(&self) -> CellCount {
        self.filled_count
    }

    pub(crate) fn mask(&self) -> &Array2<bool> {
        &self.mask
    }
}

impl Index<Coord2> for Solution {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.mask[(x as usize, y as usize)]
    }
}

/// Outcome of one mutating board operation. `Solved` is level-triggered: every
/// operation whose post-check finds the grid matching the solution reports it,
/// including repeated checks while already solved. Edge detection, if wanted,
/// belongs to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayOutcome {
    NoChange,
    Changed,
    Solved,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        use PlayOutcome::*;
        match self {
            NoChange => false,
            Changed => true,
            Solved => true,
        }
    }

    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl BitOr for PlayOutcome {
    type Output = PlayOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use PlayOutcome::*;
        match (self, rhs) {
            (Solved, _) => Solved,
            (_, Solved) => Solved,
            (Changed, _) => Changed,
            (_, Changed) => Changed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
