//! Solver façade over the backtracking search.
//!
//! All state is per-call: the solver clones or borrows the caller's grid
//! and drives the recursion in `backtrack`, with cell selection in
//! `select` and constraint checking in `legality`.

mod backtrack;
mod legality;
mod select;

use crate::Grid;
use legality::OccupancyMasks;
use serde::{Deserialize, Serialize};

pub use legality::is_legal;
pub use select::Heuristic;

/// Solver configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Strategy for choosing the next cell to fill.
    pub heuristic: Heuristic,
}

/// Exhaustive backtracking solver.
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve the puzzle, returning the solved grid if one exists.
    ///
    /// Returns `None` when the search space is exhausted. A contradictory
    /// seed (e.g. a duplicate digit already in a row) is not detected up
    /// front; it simply exhausts like any other unsolvable board.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Solve the puzzle in place. Returns `true` and leaves the grid fully
    /// filled on success; returns `false` and leaves the grid exactly as
    /// it was on entry when no solution exists.
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        let mut masks = OccupancyMasks::from_grid(grid);
        backtrack::solve_recursive(grid, &mut masks, self.config.heuristic)
    }

    /// Count solutions, stopping at `limit`.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        let mut masks = OccupancyMasks::from_grid(&working);
        let mut count = 0;
        backtrack::count_solutions_recursive(
            &mut working,
            &mut masks,
            self.config.heuristic,
            &mut count,
            limit,
        );
        count
    }

    /// Check whether the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    fn classic() -> Grid {
        Grid::from_string(CLASSIC).unwrap()
    }

    #[test]
    fn test_solve_classic_puzzle() {
        let solution = Solver::new().solve(&classic()).unwrap();
        assert!(solution.is_valid_solution());
        let first_row: Vec<u8> = (0..9).map(|c| solution.get(Position::new(0, c))).collect();
        assert_eq!(first_row, [5, 3, 4, 6, 7, 8, 9, 1, 2]);
    }

    #[test]
    fn test_solve_preserves_givens() {
        let puzzle = classic();
        let solution = Solver::new().solve(&puzzle).unwrap();
        for pos in (0..9).flat_map(|r| (0..9).map(move |c| Position::new(r, c))) {
            if !puzzle.is_cell_empty(pos) {
                assert_eq!(solution.get(pos), puzzle.get(pos));
            }
        }
    }

    #[test]
    fn test_solve_all_empty_grid() {
        let solution = Solver::new().solve(&Grid::empty()).unwrap();
        assert!(solution.is_valid_solution());
    }

    #[test]
    fn test_heuristics_agree_on_solvability() {
        for heuristic in [Heuristic::MostConstrained, Heuristic::FirstEmpty] {
            let solver = Solver::with_config(SolverConfig { heuristic });
            let solution = solver.solve(&classic()).unwrap();
            assert!(solution.is_valid_solution());
        }
    }

    #[test]
    fn test_unsolvable_grid_returns_none() {
        // Row 0 holds 1..=8 and both 3x3 boxes flanking the last cell
        // contain 9, so no digit fits at R1C9.
        let mut grid = Grid::empty();
        for col in 0..8 {
            grid.set(Position::new(0, col), col as u8 + 1);
        }
        grid.set(Position::new(1, 7), 9);
        grid.set(Position::new(2, 3), 9);
        assert!(Solver::new().solve(&grid).is_none());
    }

    #[test]
    fn test_failed_solve_reverts_grid() {
        let mut grid = Grid::empty();
        for col in 0..8 {
            grid.set(Position::new(0, col), col as u8 + 1);
        }
        grid.set(Position::new(1, 7), 9);
        grid.set(Position::new(2, 3), 9);

        let snapshot = grid.clone();
        let solver = Solver::new();
        assert!(!solver.solve_in_place(&mut grid));
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_contradictory_seed_exhausts() {
        // Two 5s already in the same row: never legal, search exhausts.
        let mut grid = classic();
        grid.set(Position::new(0, 8), 5);
        assert!(Solver::new().solve(&grid).is_none());
    }

    #[test]
    fn test_classic_puzzle_has_unique_solution() {
        assert!(Solver::new().has_unique_solution(&classic()));
    }

    #[test]
    fn test_count_solutions_respects_limit() {
        let solver = Solver::new();
        // An empty grid has a vast number of completions; the limit caps
        // the search.
        assert_eq!(solver.count_solutions(&Grid::empty(), 3), 3);
        assert_eq!(solver.count_solutions(&classic(), 5), 1);
    }

    #[test]
    fn test_count_solutions_zero_for_unsolvable() {
        let mut grid = classic();
        grid.set(Position::new(0, 8), 5);
        assert_eq!(Solver::new().count_solutions(&grid, 2), 0);
    }
}
