//! Session token endpoint.
//!
//! A token keeps the service from repeating questions across calls. Once it
//! has handed out every question for a query it answers with code 4 and must
//! be reset.

use crate::{
    TriviaClient,
    error::TriviaError,
    http::{check_response, read_json},
    normalize::check_response_code,
};

const RESOURCE: &str = "session token";

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    response_code: i64,
    /// Absent on error codes; required once the code is 0.
    token: Option<String>,
}

impl TriviaClient {
    /// Request a fresh session token.
    ///
    /// # Errors
    ///
    /// Returns [`TriviaError`] if the HTTP request fails, the response cannot
    /// be parsed, or the service reports a non-zero `response_code` (message
    /// prefixed with "Failed to get session token").
    pub async fn get_session_token(&self) -> Result<String, TriviaError> {
        let url = self.endpoint("api_token.php?command=request");
        tracing::debug!("requesting session token");
        self.token_call(&url, "Failed to get session token").await
    }

    /// Reset an exhausted token so it can serve every question again.
    ///
    /// # Errors
    ///
    /// As [`TriviaClient::get_session_token`], with the message prefixed
    /// "Failed to reset session token".
    pub async fn reset_session_token(&self, token: &str) -> Result<String, TriviaError> {
        let url = self.endpoint(&format!(
            "api_token.php?command=reset&token={}",
            urlencoding::encode(token)
        ));
        tracing::debug!("resetting session token");
        self.token_call(&url, "Failed to reset session token").await
    }

    async fn token_call(&self, url: &str, context: &str) -> Result<String, TriviaError> {
        let resp = check_response(self.http.get(url).send().await?, RESOURCE)?;
        let data: TokenResponse = read_json(resp, RESOURCE).await?;
        extract_token(data, context)
    }
}

fn extract_token(data: TokenResponse, context: &str) -> Result<String, TriviaError> {
    check_response_code(data.response_code, Some(context))?;
    data.token.filter(|token| !token.is_empty()).ok_or_else(|| {
        TriviaError::Parse(format!("Failed to parse {RESOURCE} response: missing token"))
    })
}
