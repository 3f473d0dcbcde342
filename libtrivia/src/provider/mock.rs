//! Mock provider for testing
//!
//! A configurable in-memory provider that can succeed, fail or stall. It's
//! meant for integration tests that exercise the fetch flow without a
//! network.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::FetchError;
use crate::provider::TriviaProvider;
use crate::types::{Category, Difficulty, Question};

/// Configuration for mock provider behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,

    /// Error returned by `list_categories`, if any
    pub categories_error: Option<FetchError>,

    /// Error returned by `fetch_question_batch`, if any
    pub questions_error: Option<FetchError>,

    /// Delay before completing operations (simulates network latency)
    pub delay: Duration,

    /// Number of times `list_categories` has been called
    pub category_calls: Arc<Mutex<usize>>,

    /// Filters of every `fetch_question_batch` call, in order
    pub question_requests: Arc<Mutex<Vec<(Option<u32>, Option<Difficulty>)>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            questions: Vec::new(),
            categories_error: None,
            questions_error: None,
            delay: Duration::from_millis(0),
            category_calls: Arc::new(Mutex::new(0)),
            question_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock provider for testing
pub struct MockProvider {
    config: MockConfig,
}

impl MockProvider {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Provider that answers every call successfully
    pub fn with_content(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        Self::new(MockConfig {
            categories,
            questions,
            ..MockConfig::default()
        })
    }

    /// Provider whose every call fails with a transport error
    pub fn failing() -> Self {
        Self::new(MockConfig {
            categories_error: Some(FetchError::Transport("network unreachable".to_string())),
            questions_error: Some(FetchError::Transport("network unreachable".to_string())),
            ..MockConfig::default()
        })
    }

    pub fn category_calls(&self) -> usize {
        *self.config.category_calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn question_requests(&self) -> Vec<(Option<u32>, Option<Difficulty>)> {
        self.config
            .question_requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    async fn simulate_latency(&self) {
        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }
    }
}

#[async_trait]
impl TriviaProvider for MockProvider {
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        *self.config.category_calls.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        self.simulate_latency().await;

        match &self.config.categories_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.config.categories.clone()),
        }
    }

    async fn fetch_question_batch(
        &self,
        category: Option<u32>,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Question>, FetchError> {
        self.config
            .question_requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((category, difficulty));
        self.simulate_latency().await;

        if let Some(error) = &self.config.questions_error {
            return Err(error.clone());
        }
        if self.config.questions.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(self.config.questions.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
