//! Keybindings
//!
//! Maps raw key events to actions for the current screen. Kept apart from
//! the reducer so the reducer only ever sees intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libtrivia::Phase;

use super::actions::{Action, Focus};
use super::state::AppState;

/// Translate a key press into an action, if it means anything here
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global keybindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Action::Quit),
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Some(Action::Quit),
        (KeyCode::F(1), _) => return Some(Action::ToggleHelp),
        (KeyCode::Esc, _) if state.help_visible => return Some(Action::HideHelp),
        (KeyCode::Esc, _) if !state.toasts.is_empty() => return Some(Action::DismissToasts),
        _ => {}
    }

    if state.help_visible {
        return None;
    }

    match state.session.phase() {
        Phase::Selecting(_) => selection_key(state, key),
        Phase::InProgress(_) => question_key(state, key),
        Phase::Finished(_) => match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Some(Action::Restart),
            _ => None,
        },
    }
}

fn selection_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Up | KeyCode::Char('k') => step_selector(state, -1),
        KeyCode::Down | KeyCode::Char('j') => step_selector(state, 1),
        KeyCode::Enter => Some(Action::StartRequested),
        KeyCode::Char('r') if state.can_reload_categories() => Some(Action::CategoriesRequested),
        _ => None,
    }
}

/// Move the focused selector by one entry, clamped at both ends
fn step_selector(state: &AppState, delta: isize) -> Option<Action> {
    let step = |current: usize, count: usize| -> usize {
        let last = count.saturating_sub(1);
        current.saturating_add_signed(delta).min(last)
    };

    match state.focus {
        Focus::Category => {
            let index = step(state.category_index(), state.category_item_count());
            Some(Action::SelectCategory(state.category_at(index)))
        }
        Focus::Difficulty => {
            let index = step(state.difficulty_index(), state.difficulty_item_count());
            Some(Action::SelectDifficulty(state.difficulty_at(index)))
        }
        Focus::Start => None,
    }
}

fn question_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    let options = state.session.current_question()?.display_options();

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            Some(Action::SetOptionCursor(state.option_cursor.saturating_sub(1)))
        }
        KeyCode::Down | KeyCode::Char('j') => {
            Some(Action::SetOptionCursor(state.option_cursor + 1))
        }
        KeyCode::Enter => options
            .get(state.option_cursor)
            .map(|o| Action::Answer { is_correct: o.is_correct }),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            options
                .get(index)
                .map(|o| Action::Answer { is_correct: o.is_correct })
        }
        KeyCode::Char('r') => Some(Action::Restart),
        _ => None,
    }
}
