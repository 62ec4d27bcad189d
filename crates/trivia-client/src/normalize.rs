//! Response normalization: percent-decoding and the response-code table.
//!
//! The service multiplexes success and failure into one integer field,
//! `response_code`, independent of the HTTP status. Both the question and
//! token paths map it through [`check_response_code`] so the wording is
//! identical everywhere.

use std::borrow::Cow;
use std::fmt;

use crate::error::TriviaError;

/// Embedded status reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(i64),
}

impl From<i64> for ResponseCode {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::NoResults,
            2 => Self::InvalidParameter,
            3 => Self::TokenNotFound,
            4 => Self::TokenEmpty,
            5 => Self::RateLimit,
            other => Self::Unknown(other),
        }
    }
}

impl ResponseCode {
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Success => 0,
            Self::NoResults => 1,
            Self::InvalidParameter => 2,
            Self::TokenNotFound => 3,
            Self::TokenEmpty => 4,
            Self::RateLimit => 5,
            Self::Unknown(code) => code,
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    pub fn message(self) -> Cow<'static, str> {
        match self {
            Self::Success => Cow::Borrowed("Success"),
            Self::NoResults => Cow::Borrowed(
                "No results: The API doesn't have enough questions for your query.",
            ),
            Self::InvalidParameter => {
                Cow::Borrowed("Invalid parameter: Arguments passed in aren't valid.")
            }
            Self::TokenNotFound => {
                Cow::Borrowed("Token not found: Session Token does not exist.")
            }
            Self::TokenEmpty => Cow::Borrowed(
                "Token empty: Session Token has returned all possible questions. \
                 Resetting the Token is necessary.",
            ),
            Self::RateLimit => Cow::Borrowed(
                "Rate limit: Too many requests. Each IP can only access the API once every 5 seconds.",
            ),
            Self::Unknown(code) => Cow::Owned(format!("API error: response code {code}")),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Turn a non-zero `response_code` into [`TriviaError::Api`].
///
/// `context` is prefixed as `"{context}: "` to tell apart calls that share
/// the code space.
///
/// # Errors
///
/// Returns [`TriviaError::Api`] for every code other than `0`.
pub fn check_response_code(code: i64, context: Option<&str>) -> Result<(), TriviaError> {
    let response_code = ResponseCode::from(code);
    if response_code.is_success() {
        return Ok(());
    }

    let message = match context {
        Some(context) => format!("{context}: {response_code}"),
        None => response_code.to_string(),
    };
    Err(TriviaError::Api { code, message })
}

/// Percent-decode one `url3986` field.
///
/// The source guarantees single encoding. Already-decoded text containing a
/// literal `%XX` sequence would be decoded again.
///
/// # Errors
///
/// Returns [`TriviaError::Parse`] if a `%` is not followed by two hex digits,
/// or if the decoded bytes are not valid UTF-8.
pub fn decode_field(raw: &str) -> Result<String, TriviaError> {
    if let Some(at) = malformed_escape(raw) {
        return Err(TriviaError::Parse(format!(
            "invalid percent-encoded field {raw:?}: malformed escape at byte {at}"
        )));
    }
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .map_err(|e| TriviaError::Parse(format!("invalid percent-encoded field {raw:?}: {e}")))
}

/// Byte offset of the first `%` not followed by two hex digits.
///
/// `urlencoding` passes such sequences through verbatim; `url3986` output
/// never contains them, so their presence means a corrupt payload.
fn malformed_escape(raw: &str) -> Option<usize> {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().find_map(|(at, &byte)| {
        let well_formed = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        (byte == b'%' && !well_formed).then_some(at)
    })
}

/// Decode every element of a list field.
///
/// # Errors
///
/// Returns the first [`decode_field`] failure.
pub fn decode_all(raw: &[String]) -> Result<Vec<String>, TriviaError> {
    raw.iter().map(|field| decode_field(field)).collect()
}
