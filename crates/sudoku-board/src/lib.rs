//! Sudoku board model, puzzle library, and solution validator.
//!
//! This crate is pure and free of any UI concerns: it owns the 9x9 grid
//! representation, a fixed library of pre-authored puzzles grouped by
//! difficulty, and the validator that decides whether a filled board is
//! a correct Sudoku solution and which region first breaks the rules.

mod grid;
mod library;
mod validate;

pub use grid::{Grid, GridError, Position};
pub use library::{Difficulty, PuzzleLibrary};
pub use validate::{is_valid_region, region_positions, validate, RegionKind, ValidationResult};
