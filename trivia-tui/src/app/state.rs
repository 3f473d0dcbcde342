//! Application state
//!
//! Single source of truth for the TUI. The quiz itself lives in
//! [`Session`]; everything else here is presentation bookkeeping (focus,
//! cursors, loading flags, toasts). All transitions go through the reducer.

use std::time::Duration;

use libtrivia::notify::DEFAULT_TTL;
use libtrivia::{Difficulty, Notification, Session};

use super::actions::Focus;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Quiz session (phase, categories, game)
    pub session: Session,

    /// Focused control on the selection screen
    pub focus: Focus,

    /// Highlighted answer option on the question screen
    pub option_cursor: usize,

    /// Category fetch in flight?
    pub loading_categories: bool,

    /// Question fetch in flight?
    pub loading_questions: bool,

    /// Visible notifications, oldest first
    pub toasts: Vec<Notification>,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// How long toasts stay visible
    pub notification_ttl: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            session: Session::new(),
            focus: Focus::default(),
            option_cursor: 0,
            loading_categories: false,
            loading_questions: false,
            toasts: Vec::new(),
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("TRIVIA_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("TRIVIA_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
            notification_ttl: DEFAULT_TTL,
        }
    }
}

impl UiConfig {
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Number of entries in the category selector, placeholder included
    pub fn category_item_count(&self) -> usize {
        self.session.categories().len() + 1
    }

    /// Selector index of the chosen category.
    ///
    /// Index 0 is the "any category" placeholder, which is also what an id
    /// missing from the loaded list maps to.
    pub fn category_index(&self) -> usize {
        let selected = self.session.selection().and_then(|s| s.category);
        match selected {
            Some(id) => self
                .session
                .categories()
                .iter()
                .position(|c| c.id == id)
                .map(|i| i + 1)
                .unwrap_or(0),
            None => 0,
        }
    }

    /// Category id behind a selector index
    pub fn category_at(&self, index: usize) -> Option<u32> {
        index
            .checked_sub(1)
            .and_then(|i| self.session.categories().get(i))
            .map(|c| c.id)
    }

    /// Number of entries in the difficulty selector, placeholder included
    pub fn difficulty_item_count(&self) -> usize {
        Difficulty::ALL.len() + 1
    }

    pub fn difficulty_index(&self) -> usize {
        let selected = self.session.selection().and_then(|s| s.difficulty);
        match selected {
            Some(d) => Difficulty::ALL
                .iter()
                .position(|x| *x == d)
                .map(|i| i + 1)
                .unwrap_or(0),
            None => 0,
        }
    }

    pub fn difficulty_at(&self, index: usize) -> Option<Difficulty> {
        index
            .checked_sub(1)
            .and_then(|i| Difficulty::ALL.get(i))
            .copied()
    }

    /// Category reload is offered only when the list never arrived
    pub fn can_reload_categories(&self) -> bool {
        self.session.categories().is_empty() && !self.loading_categories
    }
}
