use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::Coord2;

/// One live drag gesture: the literal start target plus the cells visited
/// since, in visit order and without duplicates. The start cell itself only
/// joins the selection once the pointer has left it, so a drag that never
/// leaves its start cell selects nothing and the plain click path handles it
/// instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragSelection {
    start: Option<Coord2>,
    picked: Vec<Coord2>,
}

impl DragSelection {
    /// `start` is `None` when the gesture began outside the grid.
    pub fn new(start: Option<Coord2>) -> Self {
        Self {
            start,
            picked: Vec::new(),
        }
    }

    pub fn extend(&mut self, pos: Coord2) {
        if self.start == Some(pos) || self.picked.contains(&pos) {
            return;
        }
        if self.picked.is_empty() {
            // First cell reached away from the start: the gesture is now a
            // real drag, so the start cell joins retroactively.
            self.picked.extend(self.start);
        }
        self.picked.push(pos);
    }

    pub fn contains(&self, pos: Coord2) -> bool {
        self.picked.contains(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn finish(self) -> Vec<Coord2> {
        self.picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn never_leaving_the_start_cell_selects_nothing() {
        let mut selection = DragSelection::new(Some((1, 1)));
        selection.extend((1, 1));
        assert!(selection.is_empty());
        assert_eq!(selection.finish(), vec![]);
    }

    #[test]
    fn leaving_the_start_cell_includes_it() {
        let mut selection = DragSelection::new(Some((1, 1)));
        selection.extend((1, 2));
        selection.extend((1, 3));
        assert_eq!(selection.finish(), vec![(1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn revisited_cells_are_not_added_twice() {
        let mut selection = DragSelection::new(Some((0, 0)));
        selection.extend((0, 1));
        selection.extend((0, 2));
        selection.extend((0, 1));
        selection.extend((0, 0));
        assert_eq!(selection.finish(), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn start_outside_the_grid_collects_only_visited_cells() {
        let mut selection = DragSelection::new(None);
        selection.extend((2, 0));
        selection.extend((2, 1));
        assert_eq!(selection.finish(), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn contains_reports_the_transient_selecting_flag() {
        let mut selection = DragSelection::new(Some((0, 0)));
        assert!(!selection.contains((0, 0)));
        selection.extend((1, 0));
        assert!(selection.contains((0, 0)));
        assert!(selection.contains((1, 0)));
        assert!(!selection.contains((2, 0)));
    }
}
