//! Cell selection: which empty cell does the search fill next?

use super::legality::OccupancyMasks;
use crate::{Grid, Position, EMPTY, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Strategy for choosing the next cell to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heuristic {
    /// Pick the empty cell with the most digits already excluded by its
    /// row, column, and box. Re-scanned at every recursion level; prunes
    /// far more than a plain scan on constrained boards.
    #[default]
    MostConstrained,
    /// Pick the leftmost empty cell, top to bottom.
    FirstEmpty,
}

/// Choose the next cell to fill, or `None` when the grid is complete.
pub fn select_cell(grid: &Grid, masks: &OccupancyMasks, heuristic: Heuristic) -> Option<Position> {
    match heuristic {
        Heuristic::MostConstrained => select_most_constrained(grid, masks),
        Heuristic::FirstEmpty => select_first_empty(grid),
    }
}

fn select_first_empty(grid: &Grid) -> Option<Position> {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            if grid.get(pos) == EMPTY {
                return Some(pos);
            }
        }
    }
    None
}

/// Most-constrained-cell scan. Tracks the empty cell with the maximum
/// blocked-digit count; the strict `>` comparison means the first cell
/// seen wins ties.
///
/// When every empty cell has a blocked count of 0, the count alone cannot
/// distinguish "grid complete" from "all empty cells fully unconstrained"
/// (the latter only arises on boards with no digits near any empty cell,
/// e.g. a blank grid). We fall back to the first empty cell in that case
/// so such boards are still searched rather than misreported as complete.
fn select_most_constrained(grid: &Grid, masks: &OccupancyMasks) -> Option<Position> {
    let mut best: Option<Position> = None;
    let mut best_blocked = 0u32;
    let mut first_empty: Option<Position> = None;

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            if grid.get(pos) != EMPTY {
                continue;
            }
            if first_empty.is_none() {
                first_empty = Some(pos);
            }
            let blocked = masks.blocked_count(pos);
            if blocked > best_blocked {
                best_blocked = blocked;
                best = Some(pos);
            }
        }
    }

    best.or(first_empty)
}
