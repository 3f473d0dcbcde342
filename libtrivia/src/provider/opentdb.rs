//! Open Trivia Database client
//!
//! Two read-only endpoints:
//!
//! - `GET /api_category.php` returns `{"trivia_categories": [{"id", "name"}]}`
//! - `GET /api.php?amount=&category=&difficulty=&type=&encode=url3986`
//!   returns `{"response_code", "results": [...]}`
//!
//! Questions are requested with RFC 3986 encoding so every string can be
//! decoded losslessly; the default HTML-entity encoding leaves `&quot;` and
//! friends in the text.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::error::{ConfigError, FetchError, Result};
use crate::provider::TriviaProvider;
use crate::types::{Category, Difficulty, Question};

const CATEGORY_PATH: &str = "/api_category.php";
const QUESTION_PATH: &str = "/api.php";
const ENCODING: &str = "url3986";

#[derive(Debug, Deserialize)]
struct CategoryResponse {
    trivia_categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct QuestionResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(default)]
    category: String,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl RawQuestion {
    fn decode(self) -> std::result::Result<Question, FetchError> {
        Ok(Question {
            text: decode(&self.question)?,
            correct_answer: decode(&self.correct_answer)?,
            incorrect_answers: self
                .incorrect_answers
                .iter()
                .map(|a| decode(a))
                .collect::<std::result::Result<Vec<_>, _>>()?,
            category: decode(&self.category)?,
        })
    }
}

fn decode(value: &str) -> std::result::Result<String, FetchError> {
    urlencoding::decode(value)
        .map(|s| s.into_owned())
        .map_err(|e| FetchError::Parse(format!("undecodable field {:?}: {}", value, e)))
}

/// Query parameters for a question batch.
///
/// Unset filters are sent as empty values, which the provider reads as
/// "any".
pub fn question_params(
    amount: u8,
    question_type: &str,
    category: Option<u32>,
    difficulty: Option<Difficulty>,
) -> Vec<(&'static str, String)> {
    vec![
        ("amount", amount.to_string()),
        ("category", category.map(|c| c.to_string()).unwrap_or_default()),
        (
            "difficulty",
            difficulty.map(|d| d.as_str().to_string()).unwrap_or_default(),
        ),
        ("type", question_type.to_string()),
        ("encode", ENCODING.to_string()),
    ]
}

pub struct OpenTdbClient {
    client: Client,
    base_url: String,
    amount: u8,
    question_type: String,
}

impl OpenTdbClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("trivia/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Invalid {
                field: "provider".to_string(),
                reason: format!("cannot build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            amount: config.amount,
            question_type: config.question_type.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_text(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> std::result::Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, ?params, "GET");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[async_trait]
impl TriviaProvider for OpenTdbClient {
    async fn list_categories(&self) -> std::result::Result<Vec<Category>, FetchError> {
        let body = self.get_text(CATEGORY_PATH, &[]).await?;
        let parsed: CategoryResponse = serde_json::from_str(&body)?;

        tracing::debug!("Loaded {} categories", parsed.trivia_categories.len());
        Ok(parsed.trivia_categories)
    }

    async fn fetch_question_batch(
        &self,
        category: Option<u32>,
        difficulty: Option<Difficulty>,
    ) -> std::result::Result<Vec<Question>, FetchError> {
        let params = question_params(self.amount, &self.question_type, category, difficulty);
        let body = self.get_text(QUESTION_PATH, &params).await?;
        let parsed: QuestionResponse = serde_json::from_str(&body)?;

        if parsed.response_code != 0 {
            return Err(FetchError::Provider(parsed.response_code));
        }
        if parsed.results.is_empty() {
            return Err(FetchError::Empty);
        }

        let questions = parsed
            .results
            .into_iter()
            .map(RawQuestion::decode)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} questions", questions.len());
        Ok(questions)
    }

    fn name(&self) -> &str {
        "opentdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_params_with_unset_filters() {
        let params = question_params(10, "multiple", None, None);

        assert_eq!(
            params,
            vec![
                ("amount", "10".to_string()),
                ("category", String::new()),
                ("difficulty", String::new()),
                ("type", "multiple".to_string()),
                ("encode", "url3986".to_string()),
            ]
        );
    }

    #[test]
    fn test_question_params_with_filters() {
        let params = question_params(10, "multiple", Some(9), Some(Difficulty::Hard));

        assert!(params.contains(&("category", "9".to_string())));
        assert!(params.contains(&("difficulty", "hard".to_string())));
    }

    #[test]
    fn test_decode_percent_encoded_fields() {
        let raw = RawQuestion {
            category: "Entertainment%3A%20Books".to_string(),
            question: "Who%20wrote%20%22Dune%22%3F".to_string(),
            correct_answer: "Frank%20Herbert".to_string(),
            incorrect_answers: vec!["Isaac%20Asimov".to_string(), "Ursula%20K.%20Le%20Guin".to_string()],
        };

        let question = raw.decode().unwrap();
        assert_eq!(question.text, "Who wrote \"Dune\"?");
        assert_eq!(question.correct_answer, "Frank Herbert");
        assert_eq!(question.incorrect_answers, vec!["Isaac Asimov", "Ursula K. Le Guin"]);
        assert_eq!(question.category, "Entertainment: Books");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let result = decode("%FF%FE");
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ProviderConfig {
            base_url: "http://localhost:9999/".to_string(),
            ..ProviderConfig::default()
        };
        let client = OpenTdbClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
        assert_eq!(client.name(), "opentdb");
    }
}
