//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. User intents come from
//! the keymap, fetch results from the service layer.

use std::time::Instant;

use libtrivia::{Category, Difficulty, FetchError, Notification, Question};

/// Actions that trigger state transitions
///
/// Actions are plain data describing what happened. The reducer
/// (see `reducer.rs`) applies them; the event loop performs the matching
/// side effects.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Periodic tick, used to expire toasts
    Tick { now: Instant },

    /// Terminal resize event
    Resize(u16, u16),

    /// Quit the application
    Quit,

    /// Show or hide the help overlay
    ToggleHelp,

    /// Hide help overlay
    HideHelp,

    /// Close every visible toast
    DismissToasts,

    // === Selection screen ===
    /// Move focus to the next selector
    FocusNext,

    /// Move focus to the previous selector
    FocusPrev,

    /// Overwrite the category filter (`None` = any)
    SelectCategory(Option<u32>),

    /// Overwrite the difficulty filter (`None` = any)
    SelectDifficulty(Option<Difficulty>),

    /// User asked to start a game with the current filters
    StartRequested,

    // === Categories ===
    /// Category list fetch issued
    CategoriesRequested,

    /// Category list arrived
    CategoriesLoaded(Vec<Category>),

    /// Category list fetch failed
    CategoriesFailed(FetchError),

    // === Questions ===
    /// Question batch arrived
    QuestionsLoaded(Vec<Question>),

    /// Question batch fetch failed
    QuestionsFailed(FetchError),

    // === Game ===
    /// Highlight the answer option at this index
    SetOptionCursor(usize),

    /// An answer control was activated
    Answer { is_correct: bool },

    /// Start over from the selection screen
    Restart,

    // === Notifications ===
    /// Show a transient message
    Notify(Notification),
}

/// Which control on the selection screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Category,
    Difficulty,
    Start,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Category => Focus::Difficulty,
            Focus::Difficulty => Focus::Start,
            Focus::Start => Focus::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Category => Focus::Start,
            Focus::Difficulty => Focus::Category,
            Focus::Start => Focus::Difficulty,
        }
    }
}
