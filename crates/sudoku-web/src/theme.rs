//! Color themes for the browser Sudoku UI

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn as_css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Color theme for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Page/canvas background
    pub background: Color,
    /// Thin grid lines
    pub grid_lines: Color,
    /// Thick 3x3 box borders
    pub box_border: Color,
    /// Plain cell background
    pub cell_bg: Color,
    /// Pre-filled cell background
    pub given_bg: Color,
    /// Row/column/box-of-cursor highlight
    pub highlight_bg: Color,
    /// Cursor cell background
    pub cursor_bg: Color,
    /// Pre-filled number color
    pub given_text: Color,
    /// Player-entered number color
    pub player_text: Color,
    /// Failing-region flash color
    pub error_bg: Color,
    /// Success wave color
    pub success_bg: Color,
    /// Info panel text
    pub info_text: Color,
    /// Neutral message color
    pub message_info: Color,
    /// Error message color
    pub message_error: Color,
    /// Success message color
    pub message_success: Color,
    /// Win banner color
    pub win_color: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::new(24, 24, 32),
            grid_lines: Color::new(60, 60, 80),
            box_border: Color::new(100, 100, 140),
            cell_bg: Color::new(32, 32, 44),
            given_bg: Color::new(40, 40, 56),
            highlight_bg: Color::new(48, 48, 64),
            cursor_bg: Color::new(70, 100, 150),
            given_text: Color::new(200, 200, 220),
            player_text: Color::new(100, 180, 255),
            error_bg: Color::new(180, 60, 60),
            success_bg: Color::new(60, 150, 80),
            info_text: Color::new(160, 160, 180),
            message_info: Color::new(160, 160, 180),
            message_error: Color::new(255, 100, 100),
            message_success: Color::new(100, 255, 150),
            win_color: Color::new(100, 255, 150),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::new(245, 245, 250),
            grid_lines: Color::new(180, 180, 200),
            box_border: Color::new(80, 80, 100),
            cell_bg: Color::new(255, 255, 255),
            given_bg: Color::new(235, 235, 242),
            highlight_bg: Color::new(230, 240, 255),
            cursor_bg: Color::new(180, 210, 255),
            given_text: Color::new(20, 20, 40),
            player_text: Color::new(30, 100, 200),
            error_bg: Color::new(240, 150, 150),
            success_bg: Color::new(160, 220, 170),
            info_text: Color::new(60, 60, 80),
            message_info: Color::new(60, 60, 80),
            message_error: Color::new(220, 50, 50),
            message_success: Color::new(50, 180, 80),
            win_color: Color::new(50, 180, 80),
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            background: Color::new(0, 0, 0),
            grid_lines: Color::new(100, 100, 100),
            box_border: Color::new(255, 255, 255),
            cell_bg: Color::new(0, 0, 0),
            given_bg: Color::new(30, 30, 30),
            highlight_bg: Color::new(40, 40, 60),
            cursor_bg: Color::new(0, 80, 160),
            given_text: Color::new(255, 255, 255),
            player_text: Color::new(0, 255, 255),
            error_bg: Color::new(200, 0, 0),
            success_bg: Color::new(0, 150, 0),
            info_text: Color::new(200, 200, 200),
            message_info: Color::new(200, 200, 200),
            message_error: Color::new(255, 0, 0),
            message_success: Color::new(0, 255, 0),
            win_color: Color::new(0, 255, 0),
        }
    }
}
