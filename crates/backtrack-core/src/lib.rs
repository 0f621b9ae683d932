//! Core Sudoku engine: a 9×9 grid model and an exhaustive backtracking
//! solver driven by a most-constrained-cell heuristic.
//!
//! The grid is the sole mutable state. The solver owns it for the duration
//! of a solve; legality checks only ever read it.

mod solver;

pub use solver::{is_legal, Heuristic, Solver, SolverConfig};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct digits, and the side length of the grid.
pub const GRID_SIZE: usize = 9;
/// Side length of one 3×3 box.
pub const BOX_SIZE: usize = 3;
/// Cell value meaning "no digit placed".
pub const EMPTY: u8 = 0;

/// A cell coordinate: row and column, each in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Coordinates outside `0..9` are a caller
    /// contract violation.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Top-left corner of the 3×3 box containing this position.
    pub fn box_origin(&self) -> Position {
        Position {
            row: self.row - self.row % BOX_SIZE,
            col: self.col - self.col % BOX_SIZE,
        }
    }

    /// Index of the containing box, `0..9`, row-major.
    pub fn box_index(&self) -> usize {
        (self.row / BOX_SIZE) * BOX_SIZE + self.col / BOX_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

/// A 9×9 Sudoku grid. Cell values are in `0..=9`, with [`EMPTY`] (0)
/// marking an unfilled cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[EMPTY; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a grid from a row-major array literal.
    pub fn from_rows(rows: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        debug_assert!(rows.iter().flatten().all(|&v| v <= 9));
        Self { cells: rows }
    }

    /// Parse an 81-character puzzle string. Digits `1`-`9` are givens;
    /// `0` or `.` mean empty. Returns `None` on any other shape.
    pub fn from_string(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.chars().count() != GRID_SIZE * GRID_SIZE {
            return None;
        }
        let mut grid = Self::empty();
        for (idx, ch) in s.chars().enumerate() {
            let value = match ch {
                '.' | '0' => EMPTY,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            grid.cells[idx / GRID_SIZE][idx % GRID_SIZE] = value;
        }
        Some(grid)
    }

    /// Value at `pos`; [`EMPTY`] if unfilled.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Place `digit` at `pos`. `digit` must be in `1..=9`.
    pub fn set(&mut self, pos: Position, digit: u8) {
        debug_assert!((1..=9).contains(&digit));
        self.cells[pos.row][pos.col] = digit;
    }

    /// Revert `pos` to empty.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = EMPTY;
    }

    /// Whether the cell at `pos` is empty.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == EMPTY
    }

    /// All empty positions, row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.cells[row][col] == EMPTY {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == EMPTY).count()
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    /// Whether the grid is a valid complete solution: every row, column,
    /// and box contains exactly the digits 1-9. Used as a test oracle;
    /// the solver itself guarantees this by construction and never
    /// re-verifies.
    pub fn is_valid_solution(&self) -> bool {
        let full: u16 = 0x1FF;
        for i in 0..GRID_SIZE {
            let mut row_mask = 0u16;
            let mut col_mask = 0u16;
            let mut box_mask = 0u16;
            for j in 0..GRID_SIZE {
                let r = self.cells[i][j];
                let c = self.cells[j][i];
                let b = self.cells[(i / BOX_SIZE) * BOX_SIZE + j / BOX_SIZE]
                    [(i % BOX_SIZE) * BOX_SIZE + j % BOX_SIZE];
                if r == EMPTY || c == EMPTY || b == EMPTY {
                    return false;
                }
                row_mask |= 1 << (r - 1);
                col_mask |= 1 << (c - 1);
                box_mask |= 1 << (b - 1);
            }
            if row_mask != full || col_mask != full || box_mask != full {
                return false;
            }
        }
        true
    }

    /// Canonical 81-character form, `0` for empty cells.
    pub fn to_line_string(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| char::from(b'0' + v))
            .collect()
    }
}

impl fmt::Display for Grid {
    /// Digits separated by single spaces, with an extra space after every
    /// 3rd column and a blank line after every 3rd row to delineate boxes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row > 0 && row % BOX_SIZE == 0 {
                writeln!(f)?;
            }
            for col in 0..GRID_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                    if col % BOX_SIZE == 0 {
                        write!(f, " ")?;
                    }
                }
                write!(f, "{}", self.cells[row][col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
