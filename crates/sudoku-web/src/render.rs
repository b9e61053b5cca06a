//! Canvas rendering for the browser Sudoku UI

use crate::game::{GameState, MessageKind, ScreenState};
use crate::theme::Theme;
use sudoku_board::Position;
use web_sys::CanvasRenderingContext2d;

/// Render the complete game to canvas
pub fn render_game(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    width: u32,
    height: u32,
    cell_size: f64,
    font_size: f64,
) {
    // Clear background
    ctx.set_fill_style_str(&theme.background.as_css());
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    // Grid position (left-aligned with room for the info panel)
    let grid_width = cell_size * 9.0 + 4.0;
    let grid_height = cell_size * 9.0 + 4.0;
    let grid_x = 40.0;
    let grid_y = (height as f64 - grid_height) / 2.0;

    render_grid(ctx, state, theme, grid_x, grid_y, cell_size, font_size);
    render_info_panel(
        ctx,
        state,
        theme,
        grid_x + grid_width + 30.0,
        grid_y,
        font_size,
    );

    match state.screen() {
        ScreenState::Paused => render_pause_overlay(ctx, theme, width, height, font_size),
        ScreenState::Menu => render_menu(ctx, theme, width, height, font_size),
        ScreenState::Won => render_win_banner(ctx, state, theme, width, height, font_size),
        ScreenState::Playing => {}
    }

    if let Some((text, kind)) = state.message() {
        render_message(ctx, theme, text, kind, width, height, font_size);
    }
}

/// Render the Sudoku grid with cell feedback overlays
fn render_grid(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    x: f64,
    y: f64,
    cell_size: f64,
    font_size: f64,
) {
    let cursor = state.cursor();

    ctx.set_font(&format!(
        "{}px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace",
        font_size
    ));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    // Cells of the failing region from the last check, if still flashing
    let flashed_cells = state.error_flash().map(|flash| flash.cells());

    for row in 0..9 {
        for col in 0..9 {
            let pos = Position::new(row, col);
            let cell_x = x + col as f64 * cell_size;
            let cell_y = y + row as f64 * cell_size;

            // Base background
            let bg_color = if pos == cursor && state.screen() == ScreenState::Playing {
                &theme.cursor_bg
            } else if state.is_highlighted(pos) && state.screen() == ScreenState::Playing {
                &theme.highlight_bg
            } else if state.is_given(pos) {
                &theme.given_bg
            } else {
                &theme.cell_bg
            };
            ctx.set_fill_style_str(&bg_color.as_css());
            ctx.fill_rect(cell_x, cell_y, cell_size, cell_size);

            // Error flash overlay on the failing region
            if let Some(cells) = flashed_cells {
                if cells.contains(&pos) {
                    let alpha = state.error_flash().map(|f| f.intensity()).unwrap_or(0.0);
                    ctx.set_fill_style_str(&theme.error_bg.as_css_alpha(alpha * 0.6));
                    ctx.fill_rect(cell_x, cell_y, cell_size, cell_size);
                }
            }

            // Success wave overlay
            if let Some(wave) = state.success_wave() {
                let alpha = wave.cell_intensity(pos);
                if alpha > 0.0 {
                    ctx.set_fill_style_str(&theme.success_bg.as_css_alpha(alpha * 0.7));
                    ctx.fill_rect(cell_x, cell_y, cell_size, cell_size);
                }
            }

            // Cell value
            let value = state.grid().get(pos);
            if value != 0 {
                let text_color = if state.is_given(pos) {
                    &theme.given_text
                } else {
                    &theme.player_text
                };
                ctx.set_fill_style_str(&text_color.as_css());
                let _ = ctx.fill_text(
                    &value.to_string(),
                    cell_x + cell_size / 2.0,
                    cell_y + cell_size / 2.0,
                );
            }
        }
    }

    // Thin grid lines
    ctx.set_stroke_style_str(&theme.grid_lines.as_css());
    ctx.set_line_width(1.0);
    for i in 0..=9 {
        let offset = i as f64 * cell_size;

        ctx.begin_path();
        ctx.move_to(x + offset, y);
        ctx.line_to(x + offset, y + 9.0 * cell_size);
        ctx.stroke();

        ctx.begin_path();
        ctx.move_to(x, y + offset);
        ctx.line_to(x + 9.0 * cell_size, y + offset);
        ctx.stroke();
    }

    // Thick box borders every third line
    ctx.set_stroke_style_str(&theme.box_border.as_css());
    ctx.set_line_width(3.0);
    for i in (0..=9).step_by(3) {
        let offset = i as f64 * cell_size;

        ctx.begin_path();
        ctx.move_to(x + offset, y);
        ctx.line_to(x + offset, y + 9.0 * cell_size);
        ctx.stroke();

        ctx.begin_path();
        ctx.move_to(x, y + offset);
        ctx.line_to(x + 9.0 * cell_size, y + offset);
        ctx.stroke();
    }
}

/// Render the side panel: title, timer, difficulty and key help
fn render_info_panel(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    x: f64,
    y: f64,
    font_size: f64,
) {
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    let title_size = font_size * 0.9;
    let line_size = font_size * 0.55;
    let line_height = line_size * 1.7;
    let mut cursor_y = y;

    ctx.set_font(&format!("bold {}px 'JetBrains Mono', monospace", title_size));
    ctx.set_fill_style_str(&theme.given_text.as_css());
    let _ = ctx.fill_text("SUDOKU", x, cursor_y);
    cursor_y += title_size * 1.8;

    ctx.set_font(&format!("{}px 'JetBrains Mono', monospace", line_size));
    ctx.set_fill_style_str(&theme.info_text.as_css());

    let _ = ctx.fill_text(&format!("Time       {}", state.elapsed_string()), x, cursor_y);
    cursor_y += line_height;
    let _ = ctx.fill_text(&format!("Difficulty {}", state.difficulty()), x, cursor_y);
    cursor_y += line_height * 1.8;

    let help = [
        "arrows/hjkl  move",
        "1-9          enter digit",
        "0/backspace  clear cell",
        "c/enter      check solution",
        "r            reset board",
        "n            new game",
        "p            pause",
    ];
    for line in help {
        let _ = ctx.fill_text(line, x, cursor_y);
        cursor_y += line_height;
    }
}

/// Render the status message line under the grid
fn render_message(
    ctx: &CanvasRenderingContext2d,
    theme: &Theme,
    text: &str,
    kind: MessageKind,
    width: u32,
    height: u32,
    font_size: f64,
) {
    let color = match kind {
        MessageKind::Info => &theme.message_info,
        MessageKind::Error => &theme.message_error,
        MessageKind::Success => &theme.message_success,
    };

    ctx.set_font(&format!(
        "bold {}px 'JetBrains Mono', monospace",
        font_size * 0.7
    ));
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    ctx.set_fill_style_str(&color.as_css());
    let _ = ctx.fill_text(text, width as f64 / 2.0, height as f64 - 14.0);
}

/// Dim the board and show the pause hint
fn render_pause_overlay(
    ctx: &CanvasRenderingContext2d,
    theme: &Theme,
    width: u32,
    height: u32,
    font_size: f64,
) {
    ctx.set_fill_style_str(&theme.background.as_css_alpha(0.85));
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ctx.set_font(&format!(
        "bold {}px 'JetBrains Mono', monospace",
        font_size * 1.3
    ));
    ctx.set_fill_style_str(&theme.given_text.as_css());
    let _ = ctx.fill_text("PAUSED", width as f64 / 2.0, height as f64 / 2.0 - font_size);

    ctx.set_font(&format!("{}px 'JetBrains Mono', monospace", font_size * 0.6));
    ctx.set_fill_style_str(&theme.info_text.as_css());
    let _ = ctx.fill_text(
        "press p to resume",
        width as f64 / 2.0,
        height as f64 / 2.0 + font_size,
    );
}

/// New-game menu with the difficulty tiers
fn render_menu(
    ctx: &CanvasRenderingContext2d,
    theme: &Theme,
    width: u32,
    height: u32,
    font_size: f64,
) {
    ctx.set_fill_style_str(&theme.background.as_css_alpha(0.85));
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let center_x = width as f64 / 2.0;
    let mut y = height as f64 / 2.0 - font_size * 3.0;

    ctx.set_font(&format!(
        "bold {}px 'JetBrains Mono', monospace",
        font_size * 1.1
    ));
    ctx.set_fill_style_str(&theme.given_text.as_css());
    let _ = ctx.fill_text("NEW GAME", center_x, y);
    y += font_size * 2.2;

    ctx.set_font(&format!("{}px 'JetBrains Mono', monospace", font_size * 0.7));
    ctx.set_fill_style_str(&theme.info_text.as_css());
    for line in ["1  Easy", "2  Medium", "3  Hard", "", "esc  back"] {
        let _ = ctx.fill_text(line, center_x, y);
        y += font_size * 1.4;
    }
}

/// Banner over the solved board
fn render_win_banner(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    width: u32,
    height: u32,
    font_size: f64,
) {
    let message = state
        .success_wave()
        .map(|wave| wave.message())
        .unwrap_or("SUDOKU SOLVED!");

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let center_x = width as f64 / 2.0;
    let banner_y = 30.0 + font_size;

    ctx.set_font(&format!(
        "bold {}px 'JetBrains Mono', monospace",
        font_size * 1.2
    ));
    ctx.set_fill_style_str(&theme.win_color.as_css());
    let _ = ctx.fill_text(message, center_x, banner_y);

    ctx.set_font(&format!("{}px 'JetBrains Mono', monospace", font_size * 0.6));
    ctx.set_fill_style_str(&theme.info_text.as_css());
    let _ = ctx.fill_text(
        &format!(
            "solved in {} | n for a new game, 1/2/3 to pick a tier",
            state.elapsed_string()
        ),
        center_x,
        banner_y + font_size * 1.6,
    );
}
