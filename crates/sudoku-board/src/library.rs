//! The fixed puzzle library.
//!
//! Puzzles are pre-authored and compiled in, grouped by difficulty
//! tier. Selection picks one uniformly at random from the requested
//! tier and hands back an independent copy.

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Difficulty tier of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

const EASY_PUZZLES: &[[[u8; 9]; 9]] = &[
    [
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ],
    [
        [0, 0, 0, 2, 6, 0, 7, 0, 1],
        [6, 8, 0, 0, 7, 0, 0, 9, 0],
        [1, 9, 0, 0, 0, 4, 5, 0, 0],
        [8, 2, 0, 1, 0, 0, 0, 4, 0],
        [0, 0, 4, 6, 0, 2, 9, 0, 0],
        [0, 5, 0, 0, 0, 3, 0, 2, 8],
        [0, 0, 9, 3, 0, 0, 0, 7, 4],
        [0, 4, 0, 0, 5, 0, 0, 3, 6],
        [7, 0, 3, 0, 1, 8, 0, 0, 0],
    ],
];

const MEDIUM_PUZZLES: &[[[u8; 9]; 9]] = &[[
    [0, 2, 0, 6, 0, 8, 0, 0, 0],
    [5, 8, 0, 0, 0, 9, 7, 0, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 0],
    [3, 7, 0, 0, 0, 0, 5, 0, 0],
    [6, 0, 0, 0, 7, 5, 0, 0, 4],
    [0, 0, 8, 0, 0, 0, 0, 1, 3],
    [0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 8, 0, 0, 0, 5, 2],
    [0, 0, 0, 0, 0, 0, 0, 7, 0],
]];

const HARD_PUZZLES: &[[[u8; 9]; 9]] = &[[
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 3, 0, 8, 5],
    [0, 0, 1, 0, 2, 0, 0, 0, 0],
    [0, 0, 0, 5, 0, 7, 0, 0, 0],
    [0, 0, 4, 0, 0, 0, 1, 0, 0],
    [0, 9, 0, 0, 0, 0, 0, 0, 0],
    [5, 0, 0, 0, 0, 0, 0, 7, 3],
    [0, 0, 2, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 9],
]];

/// Selects puzzles at random from the fixed library
pub struct PuzzleLibrary {
    rng: SimpleRng,
}

impl Default for PuzzleLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleLibrary {
    /// Create a library with a randomly seeded selector
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a library with a fixed seed for reproducible selection
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// The raw puzzle data for a tier
    fn puzzles_for(difficulty: Difficulty) -> &'static [[[u8; 9]; 9]] {
        let puzzles = match difficulty {
            Difficulty::Easy => EASY_PUZZLES,
            Difficulty::Medium => MEDIUM_PUZZLES,
            Difficulty::Hard => HARD_PUZZLES,
        };
        // A tier with no puzzles is a build-time configuration fault
        assert!(!puzzles.is_empty(), "no puzzles for tier {}", difficulty);
        puzzles
    }

    /// Number of puzzles available in a tier
    pub fn len(difficulty: Difficulty) -> usize {
        Self::puzzles_for(difficulty).len()
    }

    /// Pick one puzzle uniformly at random from the tier.
    ///
    /// The returned grid is an independent copy; mutating it never
    /// affects the stored library data.
    pub fn select(&mut self, difficulty: Difficulty) -> Grid {
        let puzzles = Self::puzzles_for(difficulty);
        let index = self.rng.next_usize(puzzles.len());
        // The library data is authored in-range, so this cannot fail
        Grid::from_rows(puzzles[index]).expect("library puzzle holds a value outside 0..=9")
    }
}

/// Small PCG-style PRNG, seeded via getrandom for WASM compatibility
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still varies the selection
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
