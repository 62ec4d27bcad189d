//! Question endpoint.

use trivia_core::Question;

use crate::{
    TriviaClient,
    error::TriviaError,
    http::{check_response, read_json},
    normalize::{check_response_code, decode_all, decode_field},
};

const RESOURCE: &str = "questions";

/// Question count the dashboard asks for by default.
pub const DEFAULT_AMOUNT: u32 = 50;

/// Parameters for one `/api.php` request.
///
/// `amount` is passed through as-is; the service enforces its own upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub amount: u32,
    pub category: Option<u32>,
    pub token: Option<String>,
}

impl Default for QuestionQuery {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT)
    }
}

impl QuestionQuery {
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self {
            amount,
            category: None,
            token: None,
        }
    }

    #[must_use]
    pub const fn category(mut self, category: Option<u32>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn token(mut self, token: Option<impl Into<String>>) -> Self {
        self.token = token.map(Into::into);
        self
    }

    /// Query string for `/api.php`. Category `0` and empty tokens are omitted.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = format!("amount={}&encode=url3986", self.amount);
        if let Some(category) = self.category.filter(|id| *id != 0) {
            query.push_str(&format!("&category={category}"));
        }
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            query.push_str(&format!("&token={}", urlencoding::encode(token)));
        }
        query
    }
}

#[derive(Debug, serde::Deserialize)]
struct QuestionsResponse {
    response_code: i64,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

#[derive(Debug, serde::Deserialize)]
struct RawQuestion {
    category: String,
    #[serde(rename = "type")]
    kind: String,
    difficulty: String,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl RawQuestion {
    fn decode(self) -> Result<Question, TriviaError> {
        Ok(Question {
            category: decode_field(&self.category)?,
            kind: decode_field(&self.kind)?,
            difficulty: decode_field(&self.difficulty)?,
            question: decode_field(&self.question)?,
            correct_answer: decode_field(&self.correct_answer)?,
            incorrect_answers: decode_all(&self.incorrect_answers)?,
        })
    }
}

impl TriviaClient {
    /// Fetch `amount` questions, optionally filtered by category and scoped to
    /// a session token.
    ///
    /// # Errors
    ///
    /// Returns [`TriviaError`] if the HTTP request fails, the service returns
    /// a non-success status, the response cannot be parsed, or the embedded
    /// `response_code` is non-zero.
    pub async fn fetch_questions(
        &self,
        amount: u32,
        category: Option<u32>,
        token: Option<&str>,
    ) -> Result<Vec<Question>, TriviaError> {
        let query = QuestionQuery::new(amount).category(category).token(token);
        self.fetch_questions_with(&query).await
    }

    /// Same as [`TriviaClient::fetch_questions`] with a prepared query.
    ///
    /// # Errors
    ///
    /// See [`TriviaClient::fetch_questions`].
    pub async fn fetch_questions_with(
        &self,
        query: &QuestionQuery,
    ) -> Result<Vec<Question>, TriviaError> {
        let url = self.endpoint(&format!("api.php?{}", query.to_query_string()));
        tracing::debug!(
            amount = query.amount,
            category = ?query.category,
            with_token = query.token.is_some(),
            "fetching questions"
        );

        let resp = check_response(self.http.get(&url).send().await?, RESOURCE)?;
        let data: QuestionsResponse = read_json(resp, RESOURCE).await?;
        decode_questions(data)
    }
}

fn decode_questions(data: QuestionsResponse) -> Result<Vec<Question>, TriviaError> {
    check_response_code(data.response_code, None)?;
    data.results
        .into_iter()
        .map(RawQuestion::decode)
        .collect::<Result<_, _>>()
        .map_err(|e| e.in_response(RESOURCE))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;
    use crate::http::parse_json;

    const FIXTURE: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "multiple",
                "difficulty": "medium",
                "category": "Science%20%26%20Nature",
                "question": "What%20is%20the%20chemical%20symbol%20for%20%22gold%22%3F",
                "correct_answer": "Au",
                "incorrect_answers": ["Ag", "Gd", "G%C3%B6"]
            },
            {
                "type": "boolean",
                "difficulty": "easy",
                "category": "History",
                "question": "The%20Great%20Fire%20of%20London%20was%20in%201666.",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            }
        ]
    }"#;

    #[test]
    fn parse_and_decode_questions() {
        let data: QuestionsResponse = parse_json(FIXTURE, RESOURCE).unwrap();
        let questions = decode_questions(data).unwrap();

        assert_eq!(questions.len(), 2);
        let first = &questions[0];
        assert_eq!(first.category, "Science & Nature");
        assert_eq!(first.kind, "multiple");
        assert_eq!(first.question, "What is the chemical symbol for \"gold\"?");
        assert_eq!(first.incorrect_answers, vec!["Ag", "Gd", "Gö"]);
        assert_eq!(questions[1].question, "The Great Fire of London was in 1666.");
    }

    #[test]
    fn no_results_code_is_api_error() {
        let data: QuestionsResponse =
            parse_json(r#"{"response_code": 1, "results": []}"#, RESOURCE).unwrap();
        let err = decode_questions(data).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().starts_with("No results"));
    }

    #[test]
    fn error_code_without_results_field_still_maps_code() {
        let data: QuestionsResponse = parse_json(r#"{"response_code": 5}"#, RESOURCE).unwrap();
        let err = decode_questions(data).unwrap_err();
        assert!(matches!(err, TriviaError::Api { code: 5, .. }));
    }

    #[test]
    fn query_string_minimal() {
        assert_eq!(
            QuestionQuery::new(50).to_query_string(),
            "amount=50&encode=url3986"
        );
    }

    #[test]
    fn query_string_with_category_and_token() {
        let query = QuestionQuery::new(10).category(Some(18)).token(Some("abc 123"));
        assert_eq!(
            query.to_query_string(),
            "amount=10&encode=url3986&category=18&token=abc%20123"
        );
    }

    #[test]
    fn query_string_drops_zero_category_and_empty_token() {
        let query = QuestionQuery::new(5).category(Some(0)).token(Some(""));
        assert_eq!(query.to_query_string(), "amount=5&encode=url3986");
    }

    #[test]
    fn default_amount() {
        assert_eq!(QuestionQuery::default().amount, DEFAULT_AMOUNT);
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_questions() {
        let client = TriviaClient::new();
        let questions = client.fetch_questions(5, None, None).await.unwrap();
        println!("\n── questions ── {} results", questions.len());
        for q in &questions {
            println!("  [{}/{}] {}", q.category, q.difficulty, q.question);
        }
        assert_eq!(questions.len(), 5);
    }
}
