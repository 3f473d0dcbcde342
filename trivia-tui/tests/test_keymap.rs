//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input maps to the right action on each screen
//! and that the resulting state is what the user expects.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libtrivia::{Category, Difficulty, Notification, NotificationKind, Phase, Question};
use trivia_tui::app::{map_key, reduce, Action, AppState, Focus};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Map and reduce in one step, like the event loop does
fn press(state: AppState, code: KeyCode) -> AppState {
    match map_key(&state, key(code)) {
        Some(action) => reduce(state, action),
        None => state,
    }
}

fn with_categories() -> AppState {
    reduce(
        AppState::new(),
        Action::CategoriesLoaded(vec![
            Category::new(9, "General Knowledge"),
            Category::new(21, "Sports"),
        ]),
    )
}

fn in_game() -> AppState {
    let question = Question::new(
        "Largest planet?",
        "Jupiter",
        vec!["Mars".to_string(), "Venus".to_string(), "Earth".to_string()],
    );
    reduce(
        AppState::new(),
        Action::QuestionsLoaded(vec![question.clone(), question]),
    )
}

#[test]
fn test_q_quits_application() {
    let state = press(AppState::new(), KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_c_quits_application() {
    let state = AppState::new();
    let action = map_key(&state, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(matches!(action, Some(Action::Quit)));
}

#[test]
fn test_f1_toggles_help() {
    let state = press(AppState::new(), KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_esc_hides_help_then_dismisses_toasts() {
    let mut state = AppState::new();
    state = reduce(
        state,
        Action::Notify(Notification::new("Failed to fetch categories.", NotificationKind::Error)),
    );
    state = press(state, KeyCode::F(1));

    state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
    assert_eq!(state.toasts.len(), 1);

    state = press(state, KeyCode::Esc);
    assert!(state.toasts.is_empty());
}

#[test]
fn test_tab_cycles_focus() {
    let state = press(AppState::new(), KeyCode::Tab);
    assert_eq!(state.focus, Focus::Difficulty);

    let state = press(state, KeyCode::Tab);
    assert_eq!(state.focus, Focus::Start);

    let state = press(state, KeyCode::BackTab);
    assert_eq!(state.focus, Focus::Difficulty);
}

#[test]
fn test_down_selects_next_category_and_clamps() {
    let mut state = with_categories();

    state = press(state, KeyCode::Down);
    assert_eq!(state.session.selection().unwrap().category, Some(9));

    state = press(state, KeyCode::Char('j'));
    assert_eq!(state.session.selection().unwrap().category, Some(21));

    state = press(state, KeyCode::Down);
    assert_eq!(state.session.selection().unwrap().category, Some(21));

    state = press(state, KeyCode::Up);
    state = press(state, KeyCode::Up);
    assert_eq!(state.session.selection().unwrap().category, None);

    state = press(state, KeyCode::Up);
    assert_eq!(state.session.selection().unwrap().category, None);
}

#[test]
fn test_difficulty_selector() {
    let mut state = press(AppState::new(), KeyCode::Tab);

    state = press(state, KeyCode::Down);
    assert_eq!(state.session.selection().unwrap().difficulty, Some(Difficulty::Easy));

    state = press(state, KeyCode::Down);
    state = press(state, KeyCode::Down);
    state = press(state, KeyCode::Down);
    assert_eq!(state.session.selection().unwrap().difficulty, Some(Difficulty::Hard));
}

#[test]
fn test_enter_requests_start_without_selection() {
    let state = AppState::new();
    let action = map_key(&state, key(KeyCode::Enter));
    assert!(matches!(action, Some(Action::StartRequested)));
}

#[test]
fn test_r_reloads_categories_only_when_missing() {
    let state = AppState::new();
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('r'))),
        Some(Action::CategoriesRequested)
    ));

    let state = with_categories();
    assert!(map_key(&state, key(KeyCode::Char('r'))).is_none());

    let state = reduce(AppState::new(), Action::CategoriesRequested);
    assert!(map_key(&state, key(KeyCode::Char('r'))).is_none());
}

#[test]
fn test_enter_answers_highlighted_option() {
    let state = in_game();

    // Cursor starts on the first incorrect answer
    let action = map_key(&state, key(KeyCode::Enter));
    assert!(matches!(action, Some(Action::Answer { is_correct: false })));

    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Down);
    let action = map_key(&state, key(KeyCode::Enter));
    assert!(matches!(action, Some(Action::Answer { is_correct: true })));
}

#[test]
fn test_digit_answers_matching_option() {
    let state = in_game();

    assert!(matches!(
        map_key(&state, key(KeyCode::Char('4'))),
        Some(Action::Answer { is_correct: true })
    ));
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('2'))),
        Some(Action::Answer { is_correct: false })
    ));
    assert!(map_key(&state, key(KeyCode::Char('5'))).is_none());

    let state = press(state, KeyCode::Char('4'));
    assert_eq!(state.session.score(), 1);
    assert_eq!(state.session.current_index(), 1);
}

#[test]
fn test_r_starts_over_mid_game() {
    let state = press(in_game(), KeyCode::Char('r'));
    assert!(state.session.is_selecting());
    assert!(state.session.questions().is_empty());
}

#[test]
fn test_score_screen_restart() {
    let mut state = in_game();
    state = press(state, KeyCode::Char('4'));
    state = press(state, KeyCode::Char('1'));
    assert!(matches!(state.session.phase(), Phase::Finished(_)));

    // Answer keys do nothing once finished
    assert!(map_key(&state, key(KeyCode::Char('1'))).is_none());

    state = press(state, KeyCode::Enter);
    assert!(state.session.is_selecting());
}
