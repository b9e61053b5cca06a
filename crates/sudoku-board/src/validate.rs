//! The solution validator.
//!
//! Checks a filled grid against the three Sudoku constraints and
//! reports the first failing region. The check order is part of the
//! contract: completeness first, then rows, columns and boxes, each in
//! ascending index order, stopping at the first failure. The UI relies
//! on that ordering to decide which region to highlight.

use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Kind of constraint region on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    Row,
    Column,
    Box,
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionKind::Row => write!(f, "row"),
            RegionKind::Column => write!(f, "column"),
            RegionKind::Box => write!(f, "box"),
        }
    }
}

/// Outcome of validating a working grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// At least one cell is still empty
    Incomplete,
    /// All 27 regions hold the digits 1..9 exactly once
    Valid,
    /// The first region (in check order) that breaks the constraint
    Invalid { kind: RegionKind, index: usize },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Check whether 9 values are a permutation of 1..9.
///
/// Any zero, duplicate, or out-of-range value fails the check. The same
/// predicate applies to rows, columns and boxes; only the extraction of
/// the 9 values differs.
pub fn is_valid_region(values: &[u8; 9]) -> bool {
    let mut seen = 0u16;
    for &value in values {
        if !(1..=9).contains(&value) {
            return false;
        }
        let bit = 1u16 << value;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

/// Validate a working grid against the Sudoku rules.
///
/// Reads the grid only; never mutates. Deterministic for a given grid.
pub fn validate(grid: &Grid) -> ValidationResult {
    if !grid.is_complete() {
        return ValidationResult::Incomplete;
    }

    for index in 0..9 {
        if !is_valid_region(&grid.row(index)) {
            return ValidationResult::Invalid {
                kind: RegionKind::Row,
                index,
            };
        }
    }

    for index in 0..9 {
        if !is_valid_region(&grid.column(index)) {
            return ValidationResult::Invalid {
                kind: RegionKind::Column,
                index,
            };
        }
    }

    for index in 0..9 {
        if !is_valid_region(&grid.box_values(index)) {
            return ValidationResult::Invalid {
                kind: RegionKind::Box,
                index,
            };
        }
    }

    ValidationResult::Valid
}

/// The 9 cell positions belonging to a region, in the same order the
/// validator reads their values. Used by the UI to highlight a failing
/// region.
pub fn region_positions(kind: RegionKind, index: usize) -> [Position; 9] {
    assert!(index < 9, "region index {} outside 0..9", index);
    match kind {
        RegionKind::Row => std::array::from_fn(|col| Position::new(index, col)),
        RegionKind::Column => std::array::from_fn(|row| Position::new(row, index)),
        RegionKind::Box => {
            let start_row = (index / 3) * 3;
            let start_col = (index % 3) * 3;
            std::array::from_fn(|i| Position::new(start_row + i / 3, start_col + i % 3))
        }
    }
}
