//! libtrivia - trivia quiz sessions backed by a remote question provider
//!
//! Holds everything that doesn't depend on a user interface: the domain
//! types, the provider client, the session state machine and the
//! notification seam used to surface fetch failures.

pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod provider;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{FetchError, Result, TriviaError};
pub use notify::{Notification, NotificationKind, Notifier};
pub use provider::TriviaProvider;
pub use session::{AnswerOutcome, Game, Phase, Selection, Session};
pub use types::{display_options, AnswerOption, Category, Difficulty, Question};
