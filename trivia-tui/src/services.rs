//! Service layer adapter for the TUI
//!
//! Bridges the async [`TriviaProvider`] to the synchronous event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: owns a tokio runtime and the provider, spawns fetches
//! - Results come back as [`ServiceEvent`]s on a crossbeam channel that the
//!   event loop drains every iteration
//! - Failures are reported once through the [`Notifier`] before the failure
//!   event is sent, so a toast always precedes the state change
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use libtrivia::provider::mock::MockProvider;
//! use trivia_tui::services::{ChannelNotifier, ServiceHandle};
//!
//! # fn example() -> trivia_tui::error::Result<()> {
//! let (tx, rx) = crossbeam_channel::unbounded();
//! let services = ServiceHandle::new(
//!     Arc::new(MockProvider::failing()),
//!     Arc::new(ChannelNotifier::new(tx.clone())),
//!     tx,
//! )?;
//!
//! services.fetch_categories();
//!
//! // In event loop, check for results
//! while let Ok(event) = rx.try_recv() {
//!     // Convert into an Action and reduce
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crossbeam_channel::Sender;
use libtrivia::notify::{CATEGORIES_FAILED, QUESTIONS_FAILED};
use libtrivia::{
    Category, Difficulty, FetchError, Notification, NotificationKind, Notifier, Question,
    TriviaProvider,
};
use tracing::{debug, info, warn};

use crate::app::{reduce, Action, AppState};
use crate::error::{Result, TuiError};

/// Messages sent from background fetches to the event loop
#[derive(Debug, Clone)]
pub enum ServiceEvent {
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed(FetchError),
    QuestionsLoaded(Vec<Question>),
    QuestionsFailed(FetchError),
    Notification(Notification),
}

impl From<ServiceEvent> for Action {
    fn from(event: ServiceEvent) -> Self {
        match event {
            ServiceEvent::CategoriesLoaded(categories) => Action::CategoriesLoaded(categories),
            ServiceEvent::CategoriesFailed(error) => Action::CategoriesFailed(error),
            ServiceEvent::QuestionsLoaded(questions) => Action::QuestionsLoaded(questions),
            ServiceEvent::QuestionsFailed(error) => Action::QuestionsFailed(error),
            ServiceEvent::Notification(notification) => Action::Notify(notification),
        }
    }
}

/// Notifier that delivers into the event loop's channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<ServiceEvent>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<ServiceEvent>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let notification = Notification::new(message, kind);
        if self.tx.send(ServiceEvent::Notification(notification)).is_err() {
            debug!("Event loop gone, dropping notification: {}", message);
        }
    }
}

/// Service handle for TUI operations
///
/// Uses its own tokio runtime so fetches never block drawing or input.
pub struct ServiceHandle {
    provider: Arc<dyn TriviaProvider>,
    notifier: Arc<dyn Notifier>,
    tx: Sender<ServiceEvent>,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a new service handle
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(
        provider: Arc<dyn TriviaProvider>,
        notifier: Arc<dyn Notifier>,
        tx: Sender<ServiceEvent>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| TuiError::Application(format!("Failed to start runtime: {}", e)))?;

        Ok(Self {
            provider,
            notifier,
            tx,
            runtime,
        })
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch the category list in the background
    pub fn fetch_categories(&self) {
        let provider = Arc::clone(&self.provider);
        let notifier = Arc::clone(&self.notifier);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let event = match provider.list_categories().await {
                Ok(categories) => {
                    info!(count = categories.len(), "Loaded categories from {}", provider.name());
                    ServiceEvent::CategoriesLoaded(categories)
                }
                Err(e) => {
                    warn!("Category fetch from {} failed: {}", provider.name(), e);
                    notifier.notify(CATEGORIES_FAILED, NotificationKind::Error);
                    ServiceEvent::CategoriesFailed(e)
                }
            };
            if tx.send(event).is_err() {
                debug!("Event loop gone, dropping category result");
            }
        });
    }

    /// Fetch a question batch for the given filters in the background
    pub fn fetch_questions(&self, category: Option<u32>, difficulty: Option<Difficulty>) {
        let provider = Arc::clone(&self.provider);
        let notifier = Arc::clone(&self.notifier);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let event = match provider.fetch_question_batch(category, difficulty).await {
                Ok(questions) => {
                    info!(
                        count = questions.len(),
                        ?category,
                        ?difficulty,
                        "Loaded question batch from {}",
                        provider.name()
                    );
                    ServiceEvent::QuestionsLoaded(questions)
                }
                Err(e) => {
                    warn!("Question fetch from {} failed: {}", provider.name(), e);
                    notifier.notify(QUESTIONS_FAILED, NotificationKind::Error);
                    ServiceEvent::QuestionsFailed(e)
                }
            };
            if tx.send(event).is_err() {
                debug!("Event loop gone, dropping question result");
            }
        });
    }
}

/// Reduce an action and issue the fetch it asks for, if any
pub fn dispatch(state: AppState, action: Action, services: &ServiceHandle) -> AppState {
    let fetch_categories = matches!(action, Action::CategoriesRequested);
    let fetch_questions = matches!(action, Action::StartRequested);

    let state = reduce(state, action);

    if fetch_categories {
        services.fetch_categories();
    }
    if fetch_questions {
        if let Some(selection) = state.session.selection() {
            services.fetch_questions(selection.category, selection.difficulty);
        }
    }

    state
}
