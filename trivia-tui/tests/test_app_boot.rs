//! Test application initialization
//!
//! Verifies that the app starts on the selection screen with correct
//! defaults based on environment variables.

use libtrivia::Phase;
use serial_test::serial;
use std::time::Duration;
use trivia_tui::app::{AppState, Focus};

#[test]
fn test_app_initializes_to_selection_screen() {
    let state = AppState::new();

    assert!(matches!(state.session.phase(), Phase::Selecting(_)));
    assert!(!state.should_quit);
    assert!(!state.help_visible);
}

#[test]
fn test_nothing_selected_on_boot() {
    let state = AppState::new();
    let selection = state.session.selection().unwrap();

    assert_eq!(selection.category, None);
    assert_eq!(selection.difficulty, None);
    assert_eq!(state.focus, Focus::Category);
    assert_eq!(state.category_index(), 0);
    assert_eq!(state.difficulty_index(), 0);
}

#[test]
fn test_no_categories_or_toasts_on_boot() {
    let state = AppState::new();

    assert!(state.session.categories().is_empty());
    assert!(state.toasts.is_empty());
    assert!(!state.loading_categories);
    assert!(!state.loading_questions);
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_trivia_env() {
    std::env::remove_var("NO_COLOR");
    std::env::set_var("TRIVIA_TUI_NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("TRIVIA_TUI_NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_custom_tick_rate_from_env() {
    std::env::set_var("TRIVIA_TUI_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("TRIVIA_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_invalid_tick_rate_falls_back_to_default() {
    std::env::set_var("TRIVIA_TUI_TICK_MS", "soon");
    let state = AppState::new();
    std::env::remove_var("TRIVIA_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 100);
}

#[test]
fn test_default_notification_ttl() {
    let state = AppState::new();
    assert_eq!(state.config.notification_ttl, Duration::from_secs(5));
}
