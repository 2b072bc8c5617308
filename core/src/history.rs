use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::Cell;

/// Single-timeline undo/redo stacks. Pushing any new command clears the redo
/// stack; there is exactly one undo cursor and no branching.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `cmd` to the grid and records it as the newest undoable step.
    pub(crate) fn push(&mut self, cmd: Command, cells: &mut Array2<Cell>) {
        cmd.apply(cells);
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
    }

    /// Reverts the most recent command, if any. Returns whether anything moved.
    pub(crate) fn undo(&mut self, cells: &mut Array2<Cell>) -> bool {
        match self.undo_stack.pop() {
            Some(cmd) => {
                cmd.revert(cells);
                self.redo_stack.push(cmd);
                true
            }
            None => false,
        }
    }

    /// Reapplies the most recently undone command, if any.
    pub(crate) fn redo(&mut self, cells: &mut Array2<Cell>) -> bool {
        match self.redo_stack.pop() {
            Some(cmd) => {
                cmd.apply(cells);
                self.undo_stack.push(cmd);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    fn grid(size: Coord2) -> Array2<Cell> {
        Array2::default(size.to_nd_index())
    }

    fn click(history: &mut History, cells: &mut Array2<Cell>, pos: Coord2) {
        let cmd = Command::cell_change(cells, pos, false);
        history.push(cmd, cells);
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_are_noops() {
        let mut cells = grid((2, 2));
        let mut history = History::new();

        assert!(!history.undo(&mut cells));
        assert!(!history.redo(&mut cells));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_command_clears_the_redo_stack() {
        let mut cells = grid((3, 1));
        let mut history = History::new();

        click(&mut history, &mut cells, (0, 0));
        click(&mut history, &mut cells, (1, 0));
        assert!(history.undo(&mut cells));
        assert_eq!(cells[[1, 0]].state, CellState::Empty);

        click(&mut history, &mut cells, (2, 0));
        assert!(!history.redo(&mut cells));

        assert_eq!(cells[[0, 0]].state, CellState::Filled);
        assert_eq!(cells[[1, 0]].state, CellState::Empty);
        assert_eq!(cells[[2, 0]].state, CellState::Filled);
    }

    #[test]
    fn full_undo_then_full_redo_restores_the_exact_grid() {
        let mut cells = grid((2, 2));
        let mut history = History::new();

        // A mixed history: two clicks on the same cell, a drag, a reset.
        click(&mut history, &mut cells, (0, 0));
        click(&mut history, &mut cells, (0, 0));
        let drag = Command::drag(
            &cells,
            alloc::vec![(0, 1), (1, 1)],
            CellState::Filled,
        );
        history.push(drag, &mut cells);
        let solution = Solution::from_filled_coords((2, 2), &[(0, 0)]).unwrap();
        let reset = Command::reset(&cells, &solution);
        history.push(reset, &mut cells);

        let snapshot = cells.clone();
        for n in 0..=4 {
            for _ in 0..n {
                assert!(history.undo(&mut cells));
            }
            for _ in 0..n {
                assert!(history.redo(&mut cells));
            }
            assert_eq!(cells, snapshot, "mismatch after undo/redo x{}", n);
        }
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut cells = grid((1, 1));
        let mut history = History::new();

        click(&mut history, &mut cells, (0, 0));
        assert!(history.undo(&mut cells));
        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
