//! The 9x9 Sudoku grid and cell addressing.

use serde::{Deserialize, Serialize};

/// Value used for an empty (player-editable) cell.
pub const EMPTY: u8 = 0;

/// A position on the 9x9 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Index of the 3x3 box containing this position (0..9, row-major)
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Iterate over all 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position::new(row, col)))
    }
}

/// Error raised when constructing a grid from out-of-contract input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A cell held a value outside 0..=9
    ValueOutOfRange { row: usize, col: usize, value: u8 },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::ValueOutOfRange { row, col, value } => write!(
                f,
                "cell ({}, {}) holds {} which is outside 0..=9",
                row, col, value
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A 9x9 Sudoku grid.
///
/// Cells hold `0..=9`, where 0 means empty. The value range is enforced
/// at construction, so every `Grid` in circulation is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// Create an empty grid (all cells 0)
    pub fn empty() -> Self {
        Self { cells: [[EMPTY; 9]; 9] }
    }

    /// Create a grid from raw rows, rejecting values outside 0..=9
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, GridError> {
        for (row, row_values) in rows.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::ValueOutOfRange { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Parse a grid from an 81-character string where '1'..'9' are
    /// values and '0' or '.' mean empty. Returns None on any other
    /// shape or character.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut cells = [[EMPTY; 9]; 9];
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 81 {
            return None;
        }
        for (i, c) in chars.iter().enumerate() {
            cells[i / 9][i % 9] = match c {
                '0' | '.' => EMPTY,
                '1'..='9' => *c as u8 - b'0',
                _ => return None,
            };
        }
        Some(Self { cells })
    }

    /// Compact 81-character form, '.' for empty cells
    pub fn to_string_compact(&self) -> String {
        let mut s = String::with_capacity(81);
        for row in &self.cells {
            for &value in row {
                if value == EMPTY {
                    s.push('.');
                } else {
                    s.push((b'0' + value) as char);
                }
            }
        }
        s
    }

    /// Get the value at a position (0 = empty)
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set the value at a position. The value must be 0..=9.
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(value <= 9, "cell value {} outside 0..=9", value);
        self.cells[pos.row][pos.col] = value;
    }

    /// Clear a cell back to empty
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = EMPTY;
    }

    /// Whether the cell at a position is empty
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == EMPTY
    }

    /// Whether every cell holds a value (no zeros left)
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&v| v != EMPTY))
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&v| v != EMPTY).count())
            .sum()
    }

    /// All cell values as a 9x9 array
    pub fn values(&self) -> [[u8; 9]; 9] {
        self.cells
    }

    /// The 9 values of a row, left to right
    pub fn row(&self, index: usize) -> [u8; 9] {
        self.cells[index]
    }

    /// The 9 values of a column, top to bottom
    pub fn column(&self, index: usize) -> [u8; 9] {
        std::array::from_fn(|row| self.cells[row][index])
    }

    /// The 9 values of a 3x3 box in row-major order.
    /// Box index is `box_row * 3 + box_col`.
    pub fn box_values(&self, index: usize) -> [u8; 9] {
        let start_row = (index / 3) * 3;
        let start_col = (index % 3) * 3;
        std::array::from_fn(|i| self.cells[start_row + i / 3][start_col + i % 3])
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty();
        assert!(!grid.is_complete());
        assert_eq!(grid.filled_count(), 0);
        assert!(grid.is_empty(Position::new(0, 0)));
    }

    #[test]
    fn test_from_rows_rejects_out_of_range() {
        let mut rows = [[0u8; 9]; 9];
        rows[3][7] = 12;
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::ValueOutOfRange {
                row: 3,
                col: 7,
                value: 12
            })
        );
        rows[3][7] = 9;
        assert!(Grid::from_rows(rows).is_ok());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::empty();
        let pos = Position::new(4, 6);
        grid.set(pos, 7);
        assert_eq!(grid.get(pos), 7);
        grid.clear(pos);
        assert!(grid.is_empty(pos));
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_range_panics() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 10);
    }

    #[test]
    fn test_string_round_trip() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 5);
        grid.set(Position::new(8, 8), 9);
        let s = grid.to_string_compact();
        assert_eq!(s.len(), 81);
        assert!(s.starts_with('5'));
        assert!(s.ends_with('9'));

        let parsed = Grid::from_string(&s).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(Grid::from_string("123").is_none());
        assert!(Grid::from_string(&"x".repeat(81)).is_none());
    }

    #[test]
    fn test_region_extraction() {
        let mut rows = [[0u8; 9]; 9];
        for col in 0..9 {
            rows[2][col] = col as u8 + 1;
        }
        rows[0][4] = 3;
        let grid = Grid::from_rows(rows).unwrap();

        assert_eq!(grid.row(2), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(grid.column(4), [3, 0, 5, 0, 0, 0, 0, 0, 0]);
        // Box 1 covers rows 0..3, cols 3..6
        assert_eq!(grid.box_values(1), [0, 3, 0, 0, 0, 0, 4, 5, 6]);
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 5).box_index(), 1);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
        assert_eq!(Position::new(6, 2).box_index(), 6);
    }

    #[test]
    fn test_position_all_covers_grid() {
        let positions: Vec<Position> = Position::all().collect();
        assert_eq!(positions.len(), 81);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[80], Position::new(8, 8));
    }
}
