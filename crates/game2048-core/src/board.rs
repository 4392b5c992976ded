//! Board representation for the 4x4 grid.
//!
//! This module contains:
//! - Grid size and win threshold constants
//! - The `Board` value type and its invariants
//! - Row/column accessors used by the move engine

use crate::game::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board
pub const BOARD_SIZE: usize = 4;

/// Tile value that wins the game when first created by a merge
pub const WIN_TILE: u32 = 2048;

/// Largest tile accepted from callers; the biggest tile a 4x4 game can reach
pub const MAX_TILE: u32 = 1 << 17;

/// One row or column of tile values
pub type Line = [u32; BOARD_SIZE];

/// A 4x4 grid of tile values, `0` meaning empty.
///
/// Every non-zero value is a power of two, at least 2. Boards are plain
/// values: every operation that changes tiles returns a new `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[Line; BOARD_SIZE]", into = "[Line; BOARD_SIZE]")]
pub struct Board {
    cells: [Line; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub const fn empty() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from rows, checking that every tile is a valid power of two
    pub fn from_rows(rows: [Line; BOARD_SIZE]) -> Result<Self, GameError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Value at a cell
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[Line; BOARD_SIZE] {
        &self.cells
    }

    /// A single row, left to right
    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    /// A single column, top to bottom
    pub fn column(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Copy of this board with one row replaced
    pub(crate) fn with_row(mut self, row: usize, line: Line) -> Self {
        self.cells[row] = line;
        self
    }

    /// Copy of this board with one column replaced (top to bottom)
    pub(crate) fn with_column(mut self, col: usize, line: Line) -> Self {
        for (row, value) in line.into_iter().enumerate() {
            self.cells[row][col] = value;
        }
        self
    }

    /// Copy of this board with one cell replaced
    pub(crate) fn with_cell(mut self, row: usize, col: usize, value: u32) -> Self {
        self.cells[row][col] = value;
        self
    }

    /// Coordinates of every empty cell in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Whether every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Copy of this board mirrored left-to-right
    pub fn reverse_rows(mut self) -> Self {
        for line in &mut self.cells {
            line.reverse();
        }
        self
    }

    /// Copy of this board mirrored top-to-bottom
    pub fn reverse_columns(mut self) -> Self {
        self.cells.reverse();
        self
    }
}

impl TryFrom<[Line; BOARD_SIZE]> for Board {
    type Error = GameError;

    fn try_from(rows: [Line; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for [Line; BOARD_SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Whether a value may appear in a cell: zero or a power of two in `2..=MAX_TILE`
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let cells: Vec<String> = line
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>5}", ".")
                    } else {
                        format!("{:>5}", v)
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
