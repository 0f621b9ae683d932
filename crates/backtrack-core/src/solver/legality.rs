//! Constraint checking: is a digit legal at a cell?
//!
//! Two functionally equivalent forms. [`is_legal`] is the reference
//! predicate, three independent linear scans over the row, the column,
//! and the containing box. [`OccupancyMasks`] keeps one placed-digit
//! bitmask per row/column/box for O(1) lookups on the search hot path;
//! the solver maintains the masks incrementally alongside grid mutation.

use crate::{Grid, Position, BOX_SIZE, GRID_SIZE};

/// Whether placing `digit` at `pos` violates no row, column, or box
/// constraint. Pure predicate; never mutates.
///
/// The cell at `pos` must be empty and `digit` in `1..=9`; violations are
/// caller contract errors, checked only in debug builds.
pub fn is_legal(grid: &Grid, pos: Position, digit: u8) -> bool {
    debug_assert!(grid.is_cell_empty(pos));
    debug_assert!((1..=9).contains(&digit));
    !row_contains(grid, pos.row, digit)
        && !col_contains(grid, pos.col, digit)
        && !box_contains(grid, pos.box_origin(), digit)
}

fn row_contains(grid: &Grid, row: usize, digit: u8) -> bool {
    (0..GRID_SIZE).any(|col| grid.get(Position::new(row, col)) == digit)
}

fn col_contains(grid: &Grid, col: usize, digit: u8) -> bool {
    (0..GRID_SIZE).any(|row| grid.get(Position::new(row, col)) == digit)
}

fn box_contains(grid: &Grid, origin: Position, digit: u8) -> bool {
    (0..BOX_SIZE).any(|dr| {
        (0..BOX_SIZE).any(|dc| grid.get(Position::new(origin.row + dr, origin.col + dc)) == digit)
    })
}

/// Placed-digit occupancy, one `u16` bitmask per row, column, and box.
/// Bit `d - 1` is set when digit `d` is present in that sector.
#[derive(Debug, Clone, Default)]
pub struct OccupancyMasks {
    rows: [u16; GRID_SIZE],
    cols: [u16; GRID_SIZE],
    boxes: [u16; GRID_SIZE],
}

impl OccupancyMasks {
    /// Build the masks from a grid snapshot.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut masks = Self::default();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = Position::new(row, col);
                let value = grid.get(pos);
                if value != crate::EMPTY {
                    masks.place(pos, value);
                }
            }
        }
        masks
    }

    /// O(1) equivalent of [`is_legal`].
    pub fn is_legal(&self, pos: Position, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));
        self.blocked_mask(pos) & digit_bit(digit) == 0
    }

    /// Bitmask of digits that cannot be placed at `pos`.
    fn blocked_mask(&self, pos: Position) -> u16 {
        self.rows[pos.row] | self.cols[pos.col] | self.boxes[pos.box_index()]
    }

    /// Number of digits in `1..=9` that cannot be placed at `pos`.
    pub fn blocked_count(&self, pos: Position) -> u32 {
        self.blocked_mask(pos).count_ones()
    }

    /// Record `digit` as placed at `pos`.
    pub fn place(&mut self, pos: Position, digit: u8) {
        let bit = digit_bit(digit);
        self.rows[pos.row] |= bit;
        self.cols[pos.col] |= bit;
        self.boxes[pos.box_index()] |= bit;
    }

    /// Record `digit` as removed from `pos`.
    pub fn remove(&mut self, pos: Position, digit: u8) {
        let bit = digit_bit(digit);
        self.rows[pos.row] &= !bit;
        self.cols[pos.col] &= !bit;
        self.boxes[pos.box_index()] &= !bit;
    }
}

#[inline]
fn digit_bit(digit: u8) -> u16 {
    debug_assert!((1..=9).contains(&digit));
    1 << (digit - 1)
}
