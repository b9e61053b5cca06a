//! Time-limited visual feedback after a solution check.

use sudoku_board::{region_positions, Position, RegionKind};

/// Ticks an error flash stays on screen (~2s at 30fps)
const ERROR_FLASH_TICKS: u32 = 60;

/// Ticks each cell glows during the success wave
const WAVE_CELL_TICKS: u32 = 30;

/// Tick delay between consecutive cells joining the wave
const WAVE_STAGGER_TICKS: u32 = 2;

/// Highlight of the first failing region, fading out over time
pub struct ErrorFlash {
    kind: RegionKind,
    index: usize,
    ticks_left: u32,
}

impl ErrorFlash {
    pub fn new(kind: RegionKind, index: usize) -> Self {
        Self {
            kind,
            index,
            ticks_left: ERROR_FLASH_TICKS,
        }
    }

    /// Advance one frame; returns false once the flash has expired
    pub fn update(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left > 0
    }

    /// The 9 cells of the flashed region
    pub fn cells(&self) -> [Position; 9] {
        region_positions(self.kind, self.index)
    }

    /// Current overlay opacity, 1.0 at the start fading to 0.0
    pub fn intensity(&self) -> f64 {
        self.ticks_left as f64 / ERROR_FLASH_TICKS as f64
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Staggered per-cell glow sweeping the board after a valid solution
pub struct SuccessWave {
    frame: u32,
    message: &'static str,
}

const WIN_MESSAGES: &[&str] = &[
    "SUDOKU SOLVED!",
    "BRILLIANT!",
    "CONGRATULATIONS!",
    "PERFECT!",
    "WELL DONE!",
    "FLAWLESS!",
];

impl SuccessWave {
    pub fn new(seed: u64) -> Self {
        Self {
            frame: 0,
            message: WIN_MESSAGES[(seed % WIN_MESSAGES.len() as u64) as usize],
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Glow opacity for a cell, 0.0 before the wave reaches it or
    /// after it has passed. Cells join in row-major order.
    pub fn cell_intensity(&self, pos: Position) -> f64 {
        let cell_index = (pos.row * 9 + pos.col) as u32;
        let start = cell_index * WAVE_STAGGER_TICKS;
        if self.frame < start {
            return 0.0;
        }
        let age = self.frame - start;
        if age >= WAVE_CELL_TICKS {
            return 0.0;
        }
        // Ramp up then down over the cell's glow window
        let half = WAVE_CELL_TICKS as f64 / 2.0;
        let t = age as f64;
        if t < half {
            t / half
        } else {
            (WAVE_CELL_TICKS as f64 - t) / half
        }
    }

    /// Whether the wave has swept past the last cell
    pub fn is_finished(&self) -> bool {
        self.frame > 80 * WAVE_STAGGER_TICKS + WAVE_CELL_TICKS
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}
