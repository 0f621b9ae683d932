//! Recursive backtracking search.
//!
//! Each frame selects a cell, tries candidate digits in ascending order,
//! and recurses. A frame that fails unwinds its own tentative placement
//! before returning, so a failed top-level search leaves the grid exactly
//! as it was on entry. The masks are maintained in lockstep with the grid.

use super::legality::OccupancyMasks;
use super::select::{select_cell, Heuristic};
use crate::Grid;

/// Search for the first solution. Returns `true` with the grid fully
/// filled, or `false` with the grid reverted to its pre-call content.
pub fn solve_recursive(grid: &mut Grid, masks: &mut OccupancyMasks, heuristic: Heuristic) -> bool {
    let pos = match select_cell(grid, masks, heuristic) {
        Some(pos) => pos,
        None => return true,
    };

    for digit in 1..=9 {
        if !masks.is_legal(pos, digit) {
            continue;
        }
        grid.set(pos, digit);
        masks.place(pos, digit);
        if solve_recursive(grid, masks, heuristic) {
            // First solution wins; the committed digit stays in place.
            return true;
        }
        grid.clear(pos);
        masks.remove(pos, digit);
    }

    false
}

/// Count solutions up to `limit`, reverting every placement so the grid
/// is unchanged when the walk finishes.
pub fn count_solutions_recursive(
    grid: &mut Grid,
    masks: &mut OccupancyMasks,
    heuristic: Heuristic,
    count: &mut usize,
    limit: usize,
) {
    if *count >= limit {
        return;
    }

    let pos = match select_cell(grid, masks, heuristic) {
        Some(pos) => pos,
        None => {
            *count += 1;
            return;
        }
    };

    for digit in 1..=9 {
        if *count >= limit {
            return;
        }
        if !masks.is_legal(pos, digit) {
            continue;
        }
        grid.set(pos, digit);
        masks.place(pos, digit);
        count_solutions_recursive(grid, masks, heuristic, count, limit);
        grid.clear(pos);
        masks.remove(pos, digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_failing_branch_reverts_its_cell() {
        // Row 0 holds 1..=8; 9 sits in the box containing R1C9, so that
        // cell has no candidates and every branch from here fails.
        let mut grid = Grid::empty();
        for col in 0..8 {
            grid.set(Position::new(0, col), col as u8 + 1);
        }
        grid.set(Position::new(1, 7), 9);

        let mut masks = OccupancyMasks::from_grid(&grid);
        let snapshot = grid.clone();
        assert!(!solve_recursive(
            &mut grid,
            &mut masks,
            Heuristic::MostConstrained
        ));
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_first_solution_semantics_stop_the_walk() {
        // An empty grid has many completions; solve returns after one.
        let mut grid = Grid::empty();
        let mut masks = OccupancyMasks::from_grid(&grid);
        assert!(solve_recursive(
            &mut grid,
            &mut masks,
            Heuristic::FirstEmpty
        ));
        assert!(grid.is_valid_solution());
        // With first-empty selection and ascending digits, the first row
        // found on a blank board is 1..=9 in order.
        let first_row: Vec<u8> = (0..9).map(|c| grid.get(Position::new(0, c))).collect();
        assert_eq!(first_row, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_count_walk_leaves_grid_untouched() {
        let grid = Grid::from_string(
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
        )
        .unwrap();
        let mut working = grid.clone();
        let mut masks = OccupancyMasks::from_grid(&working);
        let mut count = 0;
        count_solutions_recursive(
            &mut working,
            &mut masks,
            Heuristic::MostConstrained,
            &mut count,
            2,
        );
        assert_eq!(count, 1);
        assert_eq!(working, grid);
    }
}
