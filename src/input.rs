//! Input handling for the fishing screen.
//!
//! Crossterm delivers key *events*, so each event is already an edge; this
//! module folds the events seen during one frame into the per-frame
//! [`FrameInput`] signals the session consumes.

use crate::fishing::types::FrameInput;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling one key event.
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Player quit. State should be saved first.
    Quit,
}

/// Folds a key event into the edge signals for the current frame.
pub fn handle_key(key: KeyEvent, input: &mut FrameInput) -> InputResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputResult::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => {
            input.cast_or_catch = true;
            InputResult::Continue
        }
        KeyCode::Tab | KeyCode::Char('s') | KeyCode::Char('S') => {
            input.toggle_stats = true;
            InputResult::Continue
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            input.reset_stats = true;
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_is_cast_or_catch() {
        let mut input = FrameInput::default();
        assert!(matches!(
            handle_key(key(KeyCode::Char(' ')), &mut input),
            InputResult::Continue
        ));
        assert!(input.cast_or_catch);
        assert!(!input.toggle_stats);
        assert!(!input.reset_stats);
    }

    #[test]
    fn test_tab_toggles_stats() {
        let mut input = FrameInput::default();
        handle_key(key(KeyCode::Tab), &mut input);
        assert!(input.toggle_stats);
    }

    #[test]
    fn test_r_resets_stats() {
        let mut input = FrameInput::default();
        handle_key(key(KeyCode::Char('r')), &mut input);
        assert!(input.reset_stats);
    }

    #[test]
    fn test_escape_quits() {
        let mut input = FrameInput::default();
        assert!(matches!(
            handle_key(key(KeyCode::Esc), &mut input),
            InputResult::Quit
        ));
    }

    #[test]
    fn test_unmapped_keys_leave_input_untouched() {
        let mut input = FrameInput::default();
        handle_key(key(KeyCode::Char('x')), &mut input);
        assert!(!input.cast_or_catch);
        assert!(!input.toggle_stats);
        assert!(!input.reset_stats);
    }

    #[test]
    fn test_signals_accumulate_across_events_in_one_frame() {
        let mut input = FrameInput::default();
        handle_key(key(KeyCode::Char(' ')), &mut input);
        handle_key(key(KeyCode::Tab), &mut input);
        assert!(input.cast_or_catch);
        assert!(input.toggle_stats);
    }
}
