use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::select::DragSelection;
use crate::*;

/// The interactive puzzle board: owns the hidden solution, the visible cell
/// grid, the undo/redo history and the live drag selection, and exposes the
/// intent surface the input collaborator calls. Rendering only ever sees
/// read-only snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    solution: Solution,
    hints: HintSet,
    cells: Array2<Cell>,
    cross_mode: bool,
    history: History,
    selection: Option<DragSelection>,
}

impl Board {
    pub fn new(solution: Solution) -> Self {
        let size = solution.size();
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        // Fresh boards start from a reset grid, outside of history.
        Command::reset(&cells, &solution).apply(&mut cells);
        let hints = HintSet::from_solution(&solution);
        Self {
            solution,
            hints,
            cells,
            cross_mode: false,
            history: History::new(),
            selection: None,
        }
    }

    pub fn from_generator(generator: impl SolutionGenerator, config: GameConfig) -> Result<Self> {
        let solution = generator.generate(config);
        if solution.size() != config.size {
            return Err(GameError::InvalidSolutionShape);
        }
        Ok(Self::new(solution))
    }

    /// One click: advance the cell along the active mode's track, undoably.
    pub fn click_cell(&mut self, pos: Coord2) -> Result<PlayOutcome> {
        let pos = self.solution.validate_coords(pos)?;
        let cmd = Command::cell_change(&self.cells, pos, self.cross_mode);
        self.history.push(cmd, &mut self.cells);
        Ok(self.checked_outcome())
    }

    /// Opens a drag gesture. `start` is the cell under the pointer, or `None`
    /// when the gesture began outside the grid; out-of-range coordinates are
    /// treated the same as `None`. Any gesture already in flight is discarded.
    pub fn begin_drag(&mut self, start: Option<Coord2>) {
        let start = start.and_then(|pos| self.solution.validate_coords(pos).ok());
        self.selection = Some(DragSelection::new(start));
    }

    /// Adds a visited cell to the live gesture. No-op when no gesture is open.
    pub fn extend_drag(&mut self, pos: Coord2) -> Result<()> {
        let pos = self.solution.validate_coords(pos)?;
        if let Some(selection) = self.selection.as_mut() {
            selection.extend(pos);
        }
        Ok(())
    }

    /// Closes the gesture. A non-empty selection becomes a single undoable
    /// drag command painting Crossed in cross mode and Filled otherwise; an
    /// empty one (the pointer never left its start cell) emits nothing.
    pub fn end_drag(&mut self) -> PlayOutcome {
        let Some(selection) = self.selection.take() else {
            return PlayOutcome::NoChange;
        };
        if selection.is_empty() {
            return PlayOutcome::NoChange;
        }

        let target = if self.cross_mode {
            CellState::Crossed
        } else {
            CellState::Filled
        };
        let cmd = Command::drag(&self.cells, selection.finish(), target);
        self.history.push(cmd, &mut self.cells);
        self.checked_outcome()
    }

    /// Clears the grid back to Empty, undoably.
    pub fn reset(&mut self) -> PlayOutcome {
        let cmd = Command::reset(&self.cells, &self.solution);
        self.history.push(cmd, &mut self.cells);
        self.checked_outcome()
    }

    pub fn undo(&mut self) -> PlayOutcome {
        if self.history.undo(&mut self.cells) {
            self.checked_outcome()
        } else {
            PlayOutcome::NoChange
        }
    }

    pub fn redo(&mut self) -> PlayOutcome {
        if self.history.redo(&mut self.cells) {
            self.checked_outcome()
        } else {
            PlayOutcome::NoChange
        }
    }

    pub fn set_cross_mode(&mut self, cross_mode: bool) {
        self.cross_mode = cross_mode;
    }

    pub fn toggle_cross_mode(&mut self) {
        self.cross_mode = !self.cross_mode;
    }

    pub fn cross_mode(&self) -> bool {
        self.cross_mode
    }

    /// Regenerates the solution with the same dimensions, recomputes all
    /// hints, resets the grid and drops the whole history: undo never crosses
    /// a puzzle boundary.
    pub fn new_puzzle(&mut self, generator: impl SolutionGenerator) -> Result<()> {
        let solution = generator.generate(self.game_config());
        if solution.size() != self.size() {
            return Err(GameError::InvalidSolutionShape);
        }

        self.hints = HintSet::from_solution(&solution);
        self.solution = solution;
        Command::reset(&self.cells, &self.solution).apply(&mut self.cells);
        self.history.clear();
        self.selection = None;
        Ok(())
    }

    pub fn size(&self) -> Coord2 {
        self.solution.size()
    }

    pub fn game_config(&self) -> GameConfig {
        self.solution.game_config()
    }

    pub fn cell_at(&self, pos: Coord2) -> Cell {
        self.cells[pos.to_nd_index()]
    }

    pub fn state_at(&self, pos: Coord2) -> CellState {
        self.cells[pos.to_nd_index()].state
    }

    pub fn expected_at(&self, pos: Coord2) -> Option<bool> {
        self.cells[pos.to_nd_index()].expected
    }

    /// Whether `pos` is part of the live drag gesture (the transient
    /// "selecting" affordance).
    pub fn is_selecting(&self, pos: Coord2) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.contains(pos))
    }

    pub fn row_hints(&self, y: Coord) -> &[Run] {
        self.hints.row(y)
    }

    pub fn col_hints(&self, x: Coord) -> &[Run] {
        self.hints.col(x)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Pure comparison: every solution-true cell is Filled and every
    /// solution-false cell is anything but Filled. Crossed and Empty are
    /// equivalent here; the cosmetic `expected` flag plays no part.
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .zip(self.solution.mask().iter())
            .all(|(cell, &should_fill)| cell.state.is_filled() == should_fill)
    }

    fn checked_outcome(&self) -> PlayOutcome {
        if self.is_solved() {
            PlayOutcome::Solved
        } else {
            PlayOutcome::Changed
        }
    }
}
