//! Tests for the browser Sudoku game state

#[cfg(test)]
mod tests {
    use crate::game::{GameState, MessageKind, ScreenState};
    use sudoku_board::{Difficulty, Grid, Position};

    /// The classic completed grid, with one cell blanked for the player
    fn almost_solved() -> Grid {
        let mut grid = Grid::from_string(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        )
        .unwrap();
        grid.clear(Position::new(0, 2));
        grid
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(Difficulty::Easy);
        assert_eq!(state.screen(), ScreenState::Playing);
        assert_eq!(state.cursor(), Position::new(4, 4));
        assert!(!state.is_won());
        assert!(!state.is_paused());
        assert!(state.last_result().is_none());
    }

    #[test]
    fn test_working_grid_starts_as_puzzle_copy() {
        let state = GameState::new(Difficulty::Medium);
        assert_eq!(state.grid(), state.puzzle());
        assert_eq!(state.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = GameState::new(Difficulty::Easy);

        state.handle_key("ArrowUp");
        assert_eq!(state.cursor(), Position::new(3, 4));
        state.handle_key("ArrowDown");
        assert_eq!(state.cursor(), Position::new(4, 4));
        state.handle_key("h");
        assert_eq!(state.cursor(), Position::new(4, 3));
        state.handle_key("l");
        assert_eq!(state.cursor(), Position::new(4, 4));
    }

    #[test]
    fn test_cursor_boundary() {
        let mut state = GameState::new(Difficulty::Easy);
        for _ in 0..10 {
            state.handle_key("ArrowUp");
            state.handle_key("ArrowLeft");
        }
        assert_eq!(state.cursor(), Position::new(0, 0));

        state.handle_key("ArrowUp");
        state.handle_key("ArrowLeft");
        assert_eq!(state.cursor(), Position::new(0, 0));
    }

    #[test]
    fn test_given_cells_are_immutable() {
        let mut state = GameState::new(Difficulty::Easy);

        // Walk to the first pre-filled cell and try to overwrite it
        for pos in Position::all() {
            if state.is_given(pos) {
                while state.cursor().row > pos.row {
                    state.handle_key("k");
                }
                while state.cursor().row < pos.row {
                    state.handle_key("j");
                }
                while state.cursor().col > pos.col {
                    state.handle_key("h");
                }
                while state.cursor().col < pos.col {
                    state.handle_key("l");
                }
                let before = state.grid().get(pos);
                state.handle_key("5");
                assert_eq!(state.grid().get(pos), before);
                state.handle_key("Backspace");
                assert_eq!(state.grid().get(pos), before);
                return;
            }
        }
        panic!("puzzle has no given cells");
    }

    #[test]
    fn test_digit_entry_and_clear() {
        let mut state = GameState::from_puzzle(almost_solved(), Difficulty::Easy);

        // The blank is at (0, 2); cursor starts at (4, 4)
        for _ in 0..4 {
            state.handle_key("k");
        }
        for _ in 0..2 {
            state.handle_key("h");
        }
        assert_eq!(state.cursor(), Position::new(0, 2));

        state.handle_key("7");
        assert_eq!(state.grid().get(Position::new(0, 2)), 7);

        state.handle_key("0");
        assert_eq!(state.grid().get(Position::new(0, 2)), 0);
    }

    #[test]
    fn test_check_incomplete_board() {
        let mut state = GameState::from_puzzle(almost_solved(), Difficulty::Easy);
        state.check();
        assert!(!state.is_won());
        let (text, kind) = state.message().unwrap();
        assert_eq!(kind, MessageKind::Info);
        assert!(text.contains("not complete"));
    }

    #[test]
    fn test_check_wrong_digit_flashes_region() {
        let mut state = GameState::from_puzzle(almost_solved(), Difficulty::Easy);
        for _ in 0..4 {
            state.handle_key("k");
        }
        for _ in 0..2 {
            state.handle_key("h");
        }

        // 9 duplicates the value at (0, 6)
        state.handle_key("9");
        state.check();

        assert!(!state.is_won());
        assert!(state.error_flash().is_some());
        let (_, kind) = state.message().unwrap();
        assert_eq!(kind, MessageKind::Error);
    }

    #[test]
    fn test_check_correct_solution_wins() {
        let mut state = GameState::from_puzzle(almost_solved(), Difficulty::Easy);
        for _ in 0..4 {
            state.handle_key("k");
        }
        for _ in 0..2 {
            state.handle_key("h");
        }

        state.handle_key("4");
        state.check();

        assert!(state.is_won());
        assert_eq!(state.screen(), ScreenState::Won);
        assert!(state.success_wave().is_some());
        let (_, kind) = state.message().unwrap();
        assert_eq!(kind, MessageKind::Success);
    }

    #[test]
    fn test_reset_restores_puzzle() {
        let mut state = GameState::from_puzzle(almost_solved(), Difficulty::Easy);
        for _ in 0..4 {
            state.handle_key("k");
        }
        for _ in 0..2 {
            state.handle_key("h");
        }
        state.handle_key("9");
        assert_ne!(state.grid(), state.puzzle());

        state.handle_key("r");
        assert_eq!(state.grid(), state.puzzle());
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = GameState::new(Difficulty::Easy);
        state.handle_key("p");
        assert!(state.is_paused());
        state.handle_key("p");
        assert!(!state.is_paused());
    }

    #[test]
    fn test_new_game_menu() {
        let mut state = GameState::new(Difficulty::Easy);
        state.handle_key("n");
        assert_eq!(state.screen(), ScreenState::Menu);

        state.handle_key("3");
        assert_eq!(state.screen(), ScreenState::Playing);
        assert_eq!(state.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_unhandled_menu_keys_do_not_touch_grid() {
        let mut state = GameState::new(Difficulty::Easy);
        state.handle_key("n");
        assert!(!state.handle_key("5"));
        state.handle_key("Escape");
        assert_eq!(state.screen(), ScreenState::Playing);
        assert_eq!(state.grid(), state.puzzle());
    }

    #[test]
    fn test_tick_updates_frame_and_decays_message() {
        let mut state = GameState::from_puzzle(almost_solved(), Difficulty::Easy);
        state.check();
        assert!(state.message().is_some());

        let initial_frame = state.frame();
        for _ in 0..200 {
            state.tick();
        }
        assert_eq!(state.frame(), initial_frame + 200);
        assert!(state.message().is_none());
    }

    #[test]
    fn test_elapsed_time_format() {
        let state = GameState::new(Difficulty::Easy);
        assert!(state.elapsed_secs() < 2);
        let time_str = state.elapsed_string();
        assert!(time_str.contains(':'));
        assert_eq!(time_str.len(), 5);
    }
}
