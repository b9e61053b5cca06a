//! Game session state for the browser Sudoku.
//!
//! One `GameState` owns everything a session needs: the immutable
//! puzzle, the working grid the player edits, the cursor, the timer
//! and the transient feedback from the last solution check. The state
//! is only ever touched from the single UI thread.

use crate::animations::{ErrorFlash, SuccessWave};
use serde::{Deserialize, Serialize};
use sudoku_board::{validate, Difficulty, Grid, Position, PuzzleLibrary, ValidationResult};

/// Ticks a transient message stays visible (~3s at 30fps)
const MESSAGE_TICKS: u32 = 90;

/// Screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenState {
    Playing,
    Paused,
    Menu,
    Won,
}

/// Visual flavor of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Error,
    Success,
}

/// The game state
pub struct GameState {
    /// Working grid (player's progress)
    working: Grid,
    /// Original puzzle; non-empty cells here are immutable givens
    puzzle: Grid,
    /// Difficulty tier of the current puzzle
    difficulty: Difficulty,
    /// Cursor position
    cursor: Position,
    /// Screen state
    screen: ScreenState,
    /// Start timestamp (ms, performance.now)
    start_time: f64,
    /// Elapsed accumulated across pauses (ms)
    paused_elapsed: f64,
    /// Current status message
    message: Option<(String, MessageKind)>,
    /// Ticks until the message disappears
    message_timer: u32,
    /// Result of the most recent check
    last_result: Option<ValidationResult>,
    /// Flash of the failing region, if the last check found one
    error_flash: Option<ErrorFlash>,
    /// Sweeping glow after a valid solution
    success_wave: Option<SuccessWave>,
    /// Animation frame counter
    frame: u32,
}

impl GameState {
    /// Start a new session with a random puzzle from the tier
    pub fn new(difficulty: Difficulty) -> Self {
        let puzzle = PuzzleLibrary::new().select(difficulty);
        Self::from_puzzle(puzzle, difficulty)
    }

    /// Start a session from a specific puzzle grid
    pub fn from_puzzle(puzzle: Grid, difficulty: Difficulty) -> Self {
        let working = puzzle.clone();
        Self {
            working,
            puzzle,
            difficulty,
            cursor: Position::new(4, 4),
            screen: ScreenState::Playing,
            start_time: Self::now(),
            paused_elapsed: 0.0,
            message: None,
            message_timer: 0,
            last_result: None,
            error_flash: None,
            success_wave: None,
            frame: 0,
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    /// Elapsed play time in seconds (frozen while paused or won)
    pub fn elapsed_secs(&self) -> u32 {
        match self.screen {
            ScreenState::Paused | ScreenState::Won => (self.paused_elapsed / 1000.0) as u32,
            _ => {
                let elapsed = Self::now() - self.start_time + self.paused_elapsed;
                (elapsed / 1000.0) as u32
            }
        }
    }

    /// Elapsed time formatted as MM:SS
    pub fn elapsed_string(&self) -> String {
        let secs = self.elapsed_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }

    /// Advance one frame: timer display, message decay, animations.
    /// Never runs a solution check; validation is an explicit action.
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);

        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if let Some(ref mut flash) = self.error_flash {
            if !flash.update() {
                self.error_flash = None;
            }
        }
        if let Some(ref mut wave) = self.success_wave {
            wave.update();
        }
    }

    /// Handle a keyboard key, returns true if the event was consumed
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.screen {
            ScreenState::Won => self.handle_won_key(key),
            ScreenState::Paused => self.handle_paused_key(key),
            ScreenState::Menu => self.handle_menu_key(key),
            ScreenState::Playing => self.handle_playing_key(key),
        }
    }

    fn handle_won_key(&mut self, key: &str) -> bool {
        match key {
            "n" | "Enter" | " " => self.new_game(self.difficulty),
            "1" => self.new_game(Difficulty::Easy),
            "2" => self.new_game(Difficulty::Medium),
            "3" => self.new_game(Difficulty::Hard),
            _ => return false,
        }
        true
    }

    fn handle_paused_key(&mut self, key: &str) -> bool {
        match key {
            "p" | " " | "Enter" => {
                self.screen = ScreenState::Playing;
                self.start_time = Self::now();
            }
            _ => return false,
        }
        true
    }

    fn handle_menu_key(&mut self, key: &str) -> bool {
        match key {
            "Escape" => self.screen = ScreenState::Playing,
            "1" => self.new_game(Difficulty::Easy),
            "2" => self.new_game(Difficulty::Medium),
            "3" => self.new_game(Difficulty::Hard),
            _ => return false,
        }
        true
    }

    fn handle_playing_key(&mut self, key: &str) -> bool {
        match key {
            // Navigation
            "ArrowUp" | "k" => self.move_cursor(-1, 0),
            "ArrowDown" | "j" => self.move_cursor(1, 0),
            "ArrowLeft" | "h" => self.move_cursor(0, -1),
            "ArrowRight" | "l" => self.move_cursor(0, 1),

            // Digit entry
            "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                let value = key.parse::<u8>().unwrap();
                self.set_value(value);
            }

            // Clear cell
            "0" | "Delete" | "Backspace" => self.clear_cell(),

            // Check the solution
            "c" | "Enter" => self.check(),

            // Reset to the original puzzle
            "r" => self.reset(),

            // New game menu
            "n" => self.screen = ScreenState::Menu,

            // Pause
            "p" => {
                self.paused_elapsed += Self::now() - self.start_time;
                self.screen = ScreenState::Paused;
            }

            _ => return false,
        }
        true
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, 8) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, 8) as usize;
        self.cursor = Position::new(new_row, new_col);
    }

    /// Write a digit into the cursor cell if it is player-editable
    fn set_value(&mut self, value: u8) {
        if self.is_given(self.cursor) {
            return;
        }
        self.working.set(self.cursor, value);
        self.last_result = None;
        self.error_flash = None;
    }

    /// Empty the cursor cell if it is player-editable
    fn clear_cell(&mut self) {
        if self.is_given(self.cursor) {
            return;
        }
        self.working.clear(self.cursor);
        self.last_result = None;
        self.error_flash = None;
    }

    /// Run the validator on the working grid and surface the result
    pub fn check(&mut self) {
        if self.screen != ScreenState::Playing {
            return;
        }

        let result = validate(&self.working);
        self.last_result = Some(result);

        match result {
            ValidationResult::Incomplete => {
                self.show_message("Board is not complete!", MessageKind::Info);
            }
            ValidationResult::Invalid { kind, index } => {
                let text = match kind {
                    sudoku_board::RegionKind::Row => "Invalid solution! Check rows.",
                    sudoku_board::RegionKind::Column => "Invalid solution! Check columns.",
                    sudoku_board::RegionKind::Box => "Invalid solution! Check 3x3 boxes.",
                };
                self.show_message(text, MessageKind::Error);
                self.error_flash = Some(ErrorFlash::new(kind, index));
            }
            ValidationResult::Valid => {
                self.paused_elapsed += Self::now() - self.start_time;
                self.screen = ScreenState::Won;
                self.success_wave = Some(SuccessWave::new((Self::now() * 1000.0) as u64));
                self.show_message("Congratulations! Valid solution!", MessageKind::Success);
            }
        }
    }

    /// Copy the original puzzle back over the working grid
    pub fn reset(&mut self) {
        if self.screen != ScreenState::Playing {
            return;
        }
        self.working = self.puzzle.clone();
        self.last_result = None;
        self.error_flash = None;
        self.show_message("Board reset!", MessageKind::Info);
    }

    /// Discard the session and start over on the given tier
    pub fn new_game(&mut self, difficulty: Difficulty) {
        *self = GameState::new(difficulty);
    }

    /// Pause or resume the timer
    pub fn toggle_pause(&mut self) {
        match self.screen {
            ScreenState::Playing => {
                self.paused_elapsed += Self::now() - self.start_time;
                self.screen = ScreenState::Paused;
            }
            ScreenState::Paused => {
                self.start_time = Self::now();
                self.screen = ScreenState::Playing;
            }
            _ => {}
        }
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.message = Some((text.to_string(), kind));
        self.message_timer = MESSAGE_TICKS;
    }

    // Getters
    pub fn grid(&self) -> &Grid {
        &self.working
    }
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }
    pub fn cursor(&self) -> Position {
        self.cursor
    }
    pub fn screen(&self) -> ScreenState {
        self.screen
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn frame(&self) -> u32 {
        self.frame
    }
    pub fn message(&self) -> Option<(&str, MessageKind)> {
        self.message.as_ref().map(|(text, kind)| (text.as_str(), *kind))
    }
    pub fn last_result(&self) -> Option<ValidationResult> {
        self.last_result
    }
    pub fn error_flash(&self) -> Option<&ErrorFlash> {
        self.error_flash.as_ref()
    }
    pub fn success_wave(&self) -> Option<&SuccessWave> {
        self.success_wave.as_ref()
    }

    /// Whether a cell came pre-filled with the puzzle
    pub fn is_given(&self, pos: Position) -> bool {
        !self.puzzle.is_empty(pos)
    }

    pub fn is_won(&self) -> bool {
        self.screen == ScreenState::Won
    }

    pub fn is_paused(&self) -> bool {
        self.screen == ScreenState::Paused
    }

    /// Whether a position shares a row, column or box with the cursor
    pub fn is_highlighted(&self, pos: Position) -> bool {
        pos.row == self.cursor.row
            || pos.col == self.cursor.col
            || pos.box_index() == self.cursor.box_index()
    }
}
