//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(State, Action) -> State`. It never
//! performs I/O; fetches requested here are issued by the service layer
//! after the state has been reduced.

use libtrivia::AnswerOutcome;
use tracing::{debug, warn};

use super::actions::{Action, Focus};
use super::state::AppState;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No network requests
/// - No file I/O
/// - Deterministic given the action payload (time arrives via `Tick`)
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Tick { now } => {
            let ttl = state.config.notification_ttl;
            let mut toasts = state.toasts;
            toasts.retain(|t| !t.is_expired(now, ttl));
            AppState { toasts, ..state }
        }

        Action::Resize(_, _) => state,

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleHelp => AppState {
            help_visible: !state.help_visible,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::DismissToasts => AppState {
            toasts: Vec::new(),
            ..state
        },

        // === Selection screen ===
        Action::FocusNext => AppState {
            focus: state.focus.next(),
            ..state
        },

        Action::FocusPrev => AppState {
            focus: state.focus.prev(),
            ..state
        },

        Action::SelectCategory(category) => {
            let mut state = state;
            state.session.select_category(category);
            state
        }

        Action::SelectDifficulty(difficulty) => {
            let mut state = state;
            state.session.select_difficulty(difficulty);
            state
        }

        Action::StartRequested => AppState {
            loading_questions: state.loading_questions || state.session.is_selecting(),
            ..state
        },

        // === Categories ===
        Action::CategoriesRequested => AppState {
            loading_categories: true,
            ..state
        },

        Action::CategoriesLoaded(categories) => {
            let mut state = state;
            let count = categories.len();
            if state.session.set_categories(categories) {
                debug!(count, "category list applied");
            } else {
                debug!(count, "category list already loaded, ignoring");
            }
            state.loading_categories = false;
            state
        }

        Action::CategoriesFailed(error) => {
            warn!(error = %error, "category list unavailable");
            AppState {
                loading_categories: false,
                ..state
            }
        }

        // === Questions ===
        Action::QuestionsLoaded(questions) => {
            let mut state = state;
            let count = questions.len();
            if state.session.start(questions) {
                debug!(count, "game started");
                state.option_cursor = 0;
            }
            state.loading_questions = false;
            state
        }

        Action::QuestionsFailed(error) => {
            warn!(error = %error, "question batch unavailable");
            AppState {
                loading_questions: false,
                ..state
            }
        }

        // === Game ===
        Action::SetOptionCursor(index) => {
            let count = state
                .session
                .current_question()
                .map(|q| q.incorrect_answers.len() + 1)
                .unwrap_or(0);
            if count == 0 {
                return state;
            }
            AppState {
                option_cursor: index.min(count - 1),
                ..state
            }
        }

        Action::Answer { is_correct } => {
            let mut state = state;
            match state.session.answer(is_correct) {
                Some(AnswerOutcome::Advanced(index)) => {
                    debug!(index, is_correct, "answer recorded");
                    state.option_cursor = 0;
                }
                Some(AnswerOutcome::Finished) => {
                    debug!(score = state.session.score(), "game finished");
                    state.option_cursor = 0;
                }
                None => debug!("answer ignored outside a running game"),
            }
            state
        }

        Action::Restart => {
            let mut state = state;
            state.session.restart();
            state.focus = Focus::Category;
            state.option_cursor = 0;
            state
        }

        // === Notifications ===
        Action::Notify(notification) => {
            let mut toasts = state.toasts;
            toasts.push(notification);
            AppState { toasts, ..state }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libtrivia::{Category, Difficulty, FetchError, Notification, NotificationKind, Phase, Question};
    use std::time::Duration;

    fn batch(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("Q{}", i),
                    "yes",
                    vec!["no".to_string(), "maybe".to_string(), "never".to_string()],
                )
            })
            .collect()
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SelectCategory(Some(9)));

        assert_eq!(state_clone.session.selection().unwrap().category, None);
        assert_eq!(new_state.session.selection().unwrap().category, Some(9));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_help_toggle() {
        let state = reduce(AppState::new(), Action::ToggleHelp);
        assert!(state.help_visible);
        let state = reduce(state, Action::HideHelp);
        assert!(!state.help_visible);
    }

    #[test]
    fn test_categories_loaded_once() {
        let state = reduce(AppState::new(), Action::CategoriesRequested);
        assert!(state.loading_categories);

        let state = reduce(
            state,
            Action::CategoriesLoaded(vec![Category::new(9, "General Knowledge")]),
        );
        assert!(!state.loading_categories);
        assert_eq!(state.session.categories().len(), 1);

        let state = reduce(
            state,
            Action::CategoriesLoaded(vec![Category::new(10, "Books"), Category::new(11, "Film")]),
        );
        assert_eq!(state.session.categories(), &[Category::new(9, "General Knowledge")]);
    }

    #[test]
    fn test_categories_failed_keeps_empty_list() {
        let state = reduce(AppState::new(), Action::CategoriesRequested);
        let state = reduce(state, Action::CategoriesFailed(FetchError::Empty));

        assert!(!state.loading_categories);
        assert!(state.session.categories().is_empty());
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_questions_loaded_starts_game() {
        let mut state = reduce(AppState::new(), Action::SelectDifficulty(Some(Difficulty::Easy)));
        state.option_cursor = 2;
        let state = reduce(state, Action::StartRequested);
        assert!(state.loading_questions);

        let state = reduce(state, Action::QuestionsLoaded(batch(10)));
        assert!(!state.loading_questions);
        assert!(matches!(state.session.phase(), Phase::InProgress(_)));
        assert_eq!(state.session.current_index(), 0);
        assert_eq!(state.session.score(), 0);
        assert_eq!(state.option_cursor, 0);
    }

    #[test]
    fn test_questions_failed_stays_on_selection() {
        let state = reduce(AppState::new(), Action::SelectCategory(Some(21)));
        let state = reduce(state, Action::StartRequested);
        let state = reduce(
            state,
            Action::QuestionsFailed(FetchError::Transport("offline".to_string())),
        );

        assert!(!state.loading_questions);
        assert!(state.session.is_selecting());
        assert!(state.session.questions().is_empty());
        assert_eq!(state.session.selection().unwrap().category, Some(21));
    }

    #[test]
    fn test_answer_flow_to_finished() {
        let mut state = reduce(AppState::new(), Action::QuestionsLoaded(batch(2)));

        state = reduce(state, Action::SetOptionCursor(3));
        assert_eq!(state.option_cursor, 3);

        state = reduce(state, Action::Answer { is_correct: true });
        assert_eq!(state.session.current_index(), 1);
        assert_eq!(state.session.score(), 1);
        assert_eq!(state.option_cursor, 0);

        state = reduce(state, Action::Answer { is_correct: false });
        assert!(matches!(state.session.phase(), Phase::Finished(_)));
        assert_eq!(state.session.score_message().as_deref(), Some("You scored 1 out of 2"));

        // Further answers are ignored
        state = reduce(state, Action::Answer { is_correct: true });
        assert_eq!(state.session.score(), 1);
    }

    #[test]
    fn test_option_cursor_is_clamped() {
        let state = reduce(AppState::new(), Action::QuestionsLoaded(batch(1)));
        let state = reduce(state, Action::SetOptionCursor(42));
        assert_eq!(state.option_cursor, 3);

        let idle = reduce(AppState::new(), Action::SetOptionCursor(2));
        assert_eq!(idle.option_cursor, 0);
    }

    #[test]
    fn test_restart_resets_game_and_focus() {
        let mut state = reduce(
            AppState::new(),
            Action::CategoriesLoaded(vec![Category::new(9, "General Knowledge")]),
        );
        state = reduce(state, Action::SelectCategory(Some(9)));
        state = reduce(state, Action::FocusNext);
        state = reduce(state, Action::QuestionsLoaded(batch(3)));
        state = reduce(state, Action::Answer { is_correct: true });

        state = reduce(state, Action::Restart);

        assert!(state.session.is_selecting());
        assert_eq!(state.session.score(), 0);
        assert_eq!(state.session.current_index(), 0);
        assert!(state.session.questions().is_empty());
        assert_eq!(state.session.selection().unwrap().category, None);
        assert_eq!(state.session.categories().len(), 1);
        assert_eq!(state.focus, Focus::Category);
    }

    #[test]
    fn test_toasts_expire_on_tick() {
        let mut state = AppState::new();
        state.config.notification_ttl = Duration::from_secs(5);
        let toast = Notification::new("Failed to fetch questions.", NotificationKind::Error);
        let created = toast.created_at;

        state = reduce(state, Action::Notify(toast));
        state = reduce(state, Action::Tick { now: created + Duration::from_secs(1) });
        assert_eq!(state.toasts.len(), 1);

        state = reduce(state, Action::Tick { now: created + Duration::from_secs(6) });
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_dismiss_toasts() {
        let mut state = AppState::new();
        state = reduce(state, Action::Notify(Notification::new("a", NotificationKind::Info)));
        state = reduce(state, Action::Notify(Notification::new("b", NotificationKind::Error)));
        assert_eq!(state.toasts.len(), 2);

        state = reduce(state, Action::DismissToasts);
        assert!(state.toasts.is_empty());
    }
}
