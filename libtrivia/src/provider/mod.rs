//! Trivia content providers
//!
//! The provider is the authority on categories and questions. Implementations
//! only fetch and parse; they don't filter, shuffle or retry.
//!
//! # Examples
//!
//! ```no_run
//! use libtrivia::config::ProviderConfig;
//! use libtrivia::provider::{TriviaProvider, opentdb::OpenTdbClient};
//! use libtrivia::types::Difficulty;
//!
//! # async fn example() -> libtrivia::error::Result<()> {
//! let client = OpenTdbClient::new(&ProviderConfig::default())?;
//!
//! let categories = client.list_categories().await?;
//! println!("{} categories", categories.len());
//!
//! let questions = client
//!     .fetch_question_batch(Some(9), Some(Difficulty::Easy))
//!     .await?;
//! for question in &questions {
//!     println!("{}", question.text);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::{Category, Difficulty, Question};

pub mod opentdb;

// Mock provider is available for all builds (not just tests) to support integration tests
pub mod mock;

/// Read-only access to a trivia content service
#[async_trait]
pub trait TriviaProvider: Send + Sync {
    /// List every category the provider offers, in provider order
    ///
    /// # Errors
    ///
    /// Any transport, status or parse failure is a [`FetchError`].
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError>;

    /// Fetch one batch of questions
    ///
    /// `None` for either filter means "any". The category id is passed
    /// through unchecked.
    ///
    /// # Errors
    ///
    /// Fails on transport, status or parse problems and when the provider
    /// has no questions for the filters.
    async fn fetch_question_batch(
        &self,
        category: Option<u32>,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Question>, FetchError>;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}
