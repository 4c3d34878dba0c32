use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fdx_core::Scene;

use crate::tui_state::{InputMode, ViewUiState};

/// Apply one key event to the browser state. Returns true when the viewer
/// should exit.
pub(crate) fn handle_key(key: KeyEvent, scenes: &[Scene], ui: &mut ViewUiState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if ui.input_mode != InputMode::Browse {
        handle_input_key(key, scenes, ui);
        return false;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return true,
        KeyCode::Right | KeyCode::Char('n') => ui.next_scene(scenes.len()),
        KeyCode::Left | KeyCode::Char('p') => ui.previous_scene(scenes.len()),
        KeyCode::Down => ui.scroll_down(),
        KeyCode::Up => ui.scroll_up(),
        KeyCode::Char('/') => ui.begin_search(),
        KeyCode::Char('f') => ui.begin_filter(),
        KeyCode::Char('c') => ui.clear_filter(),
        KeyCode::Char('h') => ui.help_visible = !ui.help_visible,
        _ => {}
    }

    false
}

fn handle_input_key(key: KeyEvent, scenes: &[Scene], ui: &mut ViewUiState) {
    match key.code {
        KeyCode::Esc => ui.cancel_input(),
        KeyCode::Enter => match ui.input_mode {
            InputMode::Search => ui.submit_search(scenes),
            InputMode::Filter => ui.submit_filter(),
            InputMode::Browse => {}
        },
        KeyCode::Backspace | KeyCode::Delete => {
            ui.input_buffer.pop();
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                ui.input_buffer.push(ch);
            }
        }
        _ => {}
    }
}
