//! Shared HTTP response helpers.
//!
//! Centralizes the transport checks (non-success status → [`TriviaError::Status`],
//! undecodable body → [`TriviaError::Parse`]) so the endpoint modules stay
//! focused on request construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::TriviaError;

/// Reject non-success statuses. `resource` names what was being fetched.
pub fn check_response(
    resp: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, TriviaError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(TriviaError::Status {
            status: status.as_u16(),
            message: format!("Failed to fetch {resource}"),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as JSON.
///
/// Reading the body is a transport concern; decoding it is a parse concern.
pub async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    resource: &str,
) -> Result<T, TriviaError> {
    let body = resp.text().await?;
    parse_json(&body, resource)
}

pub fn parse_json<T: DeserializeOwned>(body: &str, resource: &str) -> Result<T, TriviaError> {
    serde_json::from_str(body)
        .map_err(|e| TriviaError::Parse(format!("Failed to parse {resource} response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[derive(Debug, serde::Deserialize)]
    struct Shape {
        response_code: i64,
    }

    #[test]
    fn check_response_success() {
        assert!(check_response(mock_response(200, "{}"), "categories").is_ok());
    }

    #[test]
    fn check_response_server_error() {
        let err = check_response(mock_response(503, ""), "questions").unwrap_err();
        assert!(matches!(err, TriviaError::Status { status: 503, .. }));
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.to_string(), "Failed to fetch questions (HTTP 503)");
    }

    #[tokio::test]
    async fn read_json_decodes_body() {
        let shape: Shape = read_json(mock_response(200, r#"{"response_code":0}"#), "questions")
            .await
            .unwrap();
        assert_eq!(shape.response_code, 0);
    }

    #[tokio::test]
    async fn read_json_rejects_html() {
        let err = read_json::<Shape>(mock_response(200, "<html>oops</html>"), "questions")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("Failed to parse questions response"));
    }

    #[test]
    fn parse_json_rejects_wrong_shape() {
        let err = parse_json::<Shape>(r#"{"trivia_categories":[]}"#, "questions").unwrap_err();
        assert!(matches!(err, TriviaError::Parse(_)));
    }
}
