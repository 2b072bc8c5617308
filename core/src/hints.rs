use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A maximal contiguous span of filled cells in a row or column vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub offset: Coord,
    pub len: Coord,
}

/// Scans a 1-D boolean sequence once and returns its runs in order. All-false
/// input yields an empty result.
pub fn find_runs(values: impl IntoIterator<Item = bool>) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current: Option<Run> = None;

    for (i, value) in values.into_iter().enumerate() {
        if value {
            match current.as_mut() {
                Some(run) => run.len += 1,
                None => {
                    current = Some(Run {
                        offset: i as Coord,
                        len: 1,
                    })
                }
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }

    runs.extend(current);
    runs
}

/// Numeric hints for every row and column, derived once per solution. How the
/// numbers are displayed (spaces vs line breaks) is the renderer's business.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HintSet {
    rows: Vec<Vec<Run>>,
    cols: Vec<Vec<Run>>,
}

impl HintSet {
    pub fn from_solution(solution: &Solution) -> Self {
        let mask = solution.mask();
        let rows = mask
            .columns()
            .into_iter()
            .map(|lane| find_runs(lane.iter().copied()))
            .collect();
        let cols = mask
            .rows()
            .into_iter()
            .map(|lane| find_runs(lane.iter().copied()))
            .collect();
        Self { rows, cols }
    }

    pub fn row(&self, y: Coord) -> &[Run] {
        &self.rows[y as usize]
    }

    pub fn col(&self, x: Coord) -> &[Run] {
        &self.cols[x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const fn run(offset: Coord, len: Coord) -> Run {
        Run { offset, len }
    }

    #[test]
    fn all_false_has_no_runs() {
        assert_eq!(find_runs([false, false, false]), vec![]);
    }

    #[test]
    fn finds_a_run_at_the_start() {
        assert_eq!(find_runs([true, true, false]), vec![run(0, 2)]);
    }

    #[test]
    fn finds_a_run_past_the_start() {
        assert_eq!(find_runs([false, true, true]), vec![run(1, 2)]);
    }

    #[test]
    fn finds_multiple_runs() {
        assert_eq!(
            find_runs([true, false, true, true]),
            vec![run(0, 1), run(2, 2)]
        );
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert_eq!(find_runs([]), vec![]);
    }

    #[test]
    fn hint_set_projects_rows_and_columns() {
        // 3 wide, 2 tall:
        //   x . x
        //   x x .
        let solution =
            Solution::from_filled_coords((3, 2), &[(0, 0), (2, 0), (0, 1), (1, 1)]).unwrap();
        let hints = HintSet::from_solution(&solution);

        assert_eq!(hints.row(0), &[run(0, 1), run(2, 1)]);
        assert_eq!(hints.row(1), &[run(0, 2)]);
        assert_eq!(hints.col(0), &[run(0, 2)]);
        assert_eq!(hints.col(1), &[run(1, 1)]);
        assert_eq!(hints.col(2), &[run(0, 1)]);
    }
}
