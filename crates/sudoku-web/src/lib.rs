//! Browser Sudoku game rendered to a canvas.
//!
//! The page supplies a `<canvas>` plus buttons for new game, check and
//! reset; this crate owns the game session, keyboard handling and all
//! drawing. The board model and the solution validator live in the
//! `sudoku-board` crate.

use sudoku_board::Difficulty;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent};

mod animations;
mod game;
mod render;
mod theme;

// Browser tests require wasm-pack test to run
#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use animations::{ErrorFlash, SuccessWave};
pub use game::{GameState, MessageKind, ScreenState};
pub use theme::Theme;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct SudokuGame {
    state: GameState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: Theme,
    cell_size: f64,
    font_size: f64,
    width: u32,
    height: u32,
    dpr: f64, // Device pixel ratio for crisp rendering
}

#[wasm_bindgen]
impl SudokuGame {
    /// Create a new game attached to a canvas element
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<SudokuGame, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        // Device pixel ratio keeps the board crisp on high-DPI displays
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        let width = 1000;
        let height = 700;

        // Actual canvas resolution (scaled by dpr)
        canvas.set_width((width as f64 * dpr) as u32);
        canvas.set_height((height as f64 * dpr) as u32);

        // CSS display size (logical pixels)
        let html_element: &HtmlElement = canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        let _ = ctx.scale(dpr, dpr);

        let game = SudokuGame {
            state: GameState::new(Difficulty::Easy),
            canvas,
            ctx,
            theme: Theme::dark(),
            cell_size: 56.0,
            font_size: 30.0,
            width,
            height,
            dpr,
        };

        game.render();
        Ok(game)
    }

    /// Handle keyboard input; returns true if the key was consumed
    #[wasm_bindgen]
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        let consumed = self.state.handle_key(&event.key());
        self.render();
        consumed
    }

    /// Update game state (call from requestAnimationFrame)
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.state.tick();
        self.render();
    }

    /// Start a new game on the named difficulty tier
    #[wasm_bindgen]
    pub fn new_game(&mut self, difficulty: &str) {
        let tier = match difficulty {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        };
        self.state.new_game(tier);
        self.render();
    }

    /// Validate the working grid (the Check button)
    #[wasm_bindgen]
    pub fn check(&mut self) {
        self.state.check();
        self.render();
    }

    /// Restore the working grid to the original puzzle (the Reset button)
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.state.reset();
        self.render();
    }

    /// Set the color theme
    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme_name: &str) {
        self.theme = match theme_name {
            "light" => Theme::light(),
            "high_contrast" => Theme::high_contrast(),
            _ => Theme::dark(),
        };
        self.render();
    }

    /// Toggle pause
    #[wasm_bindgen]
    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        self.render();
    }

    /// Check if the board has been solved
    #[wasm_bindgen]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Check if paused
    #[wasm_bindgen]
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Get elapsed time in seconds
    #[wasm_bindgen]
    pub fn elapsed_secs(&self) -> u32 {
        self.state.elapsed_secs()
    }

    /// Get formatted elapsed time
    #[wasm_bindgen]
    pub fn elapsed_string(&self) -> String {
        self.state.elapsed_string()
    }

    /// Get current difficulty tier name
    #[wasm_bindgen]
    pub fn difficulty(&self) -> String {
        format!("{}", self.state.difficulty())
    }

    /// Resize the game canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        // Minimum sizes
        let width = width.max(600);
        let height = height.max(500);

        self.width = width;
        self.height = height;

        // Update dpr in case it changed (e.g., moving to a different monitor)
        self.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        self.canvas.set_width((width as f64 * self.dpr) as u32);
        self.canvas.set_height((height as f64 * self.dpr) as u32);

        let html_element: &HtmlElement = self.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(self.dpr, self.dpr);

        // Cell size is limited by both dimensions; the grid must fit
        // vertically and leave room for the info panel
        let max_grid_height = (height as f64 - 80.0).max(300.0);
        let max_grid_width = (width as f64 * 0.6).max(300.0);
        let cell_by_height = max_grid_height / 9.0;
        let cell_by_width = max_grid_width / 9.0;
        self.cell_size = cell_by_height.min(cell_by_width).clamp(35.0, 70.0);

        // Font size scales with cell size
        self.font_size = (self.cell_size * 0.55).clamp(16.0, 36.0);

        self.render();
    }

    /// Get current width
    #[wasm_bindgen]
    pub fn get_width(&self) -> u32 {
        self.width
    }

    /// Get current height
    #[wasm_bindgen]
    pub fn get_height(&self) -> u32 {
        self.height
    }

    /// Render the game to canvas
    fn render(&self) {
        render::render_game(
            &self.ctx,
            &self.state,
            &self.theme,
            self.width,
            self.height,
            self.cell_size,
            self.font_size,
        );
    }
}
