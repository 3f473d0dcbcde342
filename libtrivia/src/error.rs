//! Error types for libtrivia

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TriviaError>;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TriviaError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TriviaError::InvalidInput(_) => 3,
            TriviaError::Config(_) => 2,
            TriviaError::Fetch(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Failure talking to the trivia provider.
///
/// Callers treat every variant the same way: the triggering action is
/// abandoned, the user is notified once and state is left untouched. The
/// variants only exist so logs say what actually went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Provider returned response code {0}")]
    Provider(u8),

    #[error("Provider returned no questions")]
    Empty,
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
