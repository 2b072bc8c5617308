use serde::{Deserialize, Serialize};

/// Player-visible mark on a single cell. `Crossed` is a deliberate "not part of
/// the solution" mark, distinct from an untouched `Empty` cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Filled,
    Crossed,
}

impl CellState {
    /// Next state after a click, keyed only on the current state. Normal mode
    /// cycles Empty -> Filled -> Crossed -> Empty; cross mode only toggles
    /// between Empty and Crossed, never producing Filled.
    pub const fn next(self, cross_mode: bool) -> Self {
        use CellState::*;
        if cross_mode {
            match self {
                Crossed => Empty,
                Empty | Filled => Crossed,
            }
        } else {
            match self {
                Empty => Filled,
                Filled => Crossed,
                Crossed => Empty,
            }
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

/// One grid cell. `expected` is a presentation-only hint recorded on reset
/// (whether the solution wants this cell filled); the solved check never reads
/// it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    pub expected: Option<bool>,
}

impl Cell {
    pub fn reset(&mut self, expected: bool) {
        self.state = CellState::Empty;
        self.expected = Some(expected);
    }
}
