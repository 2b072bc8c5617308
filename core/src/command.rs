use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A reversible unit of grid mutation. Every variant captures the pre-mutation
/// state of the cells it touches at construction time and is immutable
/// afterwards, so reapplying through redo is deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// One click on one cell, advancing it along the click track for the mode
    /// that was active when the click happened.
    CellChange {
        pos: Coord2,
        cross_mode: bool,
        prev: CellState,
    },
    /// One whole drag gesture. Only members that are still Empty get painted;
    /// existing marks survive. Reverting restores every member exactly.
    Drag {
        cells: Vec<Coord2>,
        target: CellState,
        prev: Vec<CellState>,
    },
    /// Clears the whole grid back to Empty, attaching the cosmetic
    /// expected-value hint per cell.
    Reset {
        expected: Array2<bool>,
        prev: Array2<Cell>,
    },
}

impl Command {
    pub(crate) fn cell_change(cells: &Array2<Cell>, pos: Coord2, cross_mode: bool) -> Self {
        Self::CellChange {
            pos,
            cross_mode,
            prev: cells[pos.to_nd_index()].state,
        }
    }

    pub(crate) fn drag(cells: &Array2<Cell>, selection: Vec<Coord2>, target: CellState) -> Self {
        let prev = selection
            .iter()
            .map(|&pos| cells[pos.to_nd_index()].state)
            .collect();
        Self::Drag {
            cells: selection,
            target,
            prev,
        }
    }

    pub(crate) fn reset(cells: &Array2<Cell>, solution: &Solution) -> Self {
        Self::Reset {
            expected: solution.mask().clone(),
            prev: cells.clone(),
        }
    }

    pub(crate) fn apply(&self, grid: &mut Array2<Cell>) {
        match self {
            Self::CellChange {
                pos, cross_mode, ..
            } => {
                let cell = &mut grid[pos.to_nd_index()];
                cell.state = cell.state.next(*cross_mode);
            }
            Self::Drag { cells, target, .. } => {
                for &pos in cells {
                    let cell = &mut grid[pos.to_nd_index()];
                    if cell.state.is_empty() {
                        cell.state = *target;
                    }
                }
            }
            Self::Reset { expected, .. } => {
                for (cell, &should_fill) in grid.iter_mut().zip(expected.iter()) {
                    cell.reset(should_fill);
                }
            }
        }
    }

    pub(crate) fn revert(&self, grid: &mut Array2<Cell>) {
        match self {
            Self::CellChange { pos, prev, .. } => {
                grid[pos.to_nd_index()].state = *prev;
            }
            Self::Drag { cells, prev, .. } => {
                for (&pos, &prev_state) in cells.iter().zip(prev.iter()) {
                    grid[pos.to_nd_index()].state = prev_state;
                }
            }
            Self::Reset { prev, .. } => {
                grid.assign(prev);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn grid(size: Coord2) -> Array2<Cell> {
        Array2::default(size.to_nd_index())
    }

    #[test]
    fn cell_change_advances_and_reverts() {
        let mut cells = grid((2, 2));
        let cmd = Command::cell_change(&cells, (1, 0), false);

        cmd.apply(&mut cells);
        assert_eq!(cells[[1, 0]].state, CellState::Filled);

        cmd.revert(&mut cells);
        assert_eq!(cells[[1, 0]].state, CellState::Empty);
    }

    #[test]
    fn drag_paints_only_empty_cells() {
        let mut cells = grid((3, 1));
        cells[[1, 0]].state = CellState::Filled;
        cells[[2, 0]].state = CellState::Crossed;

        let cmd = Command::drag(
            &cells,
            vec![(0, 0), (1, 0), (2, 0)],
            CellState::Filled,
        );
        cmd.apply(&mut cells);

        assert_eq!(cells[[0, 0]].state, CellState::Filled);
        assert_eq!(cells[[1, 0]].state, CellState::Filled);
        assert_eq!(cells[[2, 0]].state, CellState::Crossed);
    }

    #[test]
    fn drag_revert_restores_per_cell_states() {
        let mut cells = grid((3, 1));
        cells[[1, 0]].state = CellState::Filled;
        cells[[2, 0]].state = CellState::Crossed;

        let cmd = Command::drag(
            &cells,
            vec![(0, 0), (1, 0), (2, 0)],
            CellState::Filled,
        );
        cmd.apply(&mut cells);
        cmd.revert(&mut cells);

        assert_eq!(cells[[0, 0]].state, CellState::Empty);
        assert_eq!(cells[[1, 0]].state, CellState::Filled);
        assert_eq!(cells[[2, 0]].state, CellState::Crossed);
    }

    #[test]
    fn reset_clears_everything_and_revert_brings_it_back() {
        let solution = Solution::from_filled_coords((2, 1), &[(0, 0)]).unwrap();
        let mut cells = grid((2, 1));
        cells[[0, 0]].state = CellState::Crossed;
        cells[[1, 0]].state = CellState::Filled;

        let cmd = Command::reset(&cells, &solution);
        cmd.apply(&mut cells);

        assert_eq!(cells[[0, 0]], Cell { state: CellState::Empty, expected: Some(true) });
        assert_eq!(cells[[1, 0]], Cell { state: CellState::Empty, expected: Some(false) });

        cmd.revert(&mut cells);
        assert_eq!(cells[[0, 0]].state, CellState::Crossed);
        assert_eq!(cells[[1, 0]].state, CellState::Filled);
    }
}
