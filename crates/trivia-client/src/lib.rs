//! # trivia-client
//!
//! HTTP client for the Open Trivia Database.
//!
//! Every request asks for `url3986` encoding, and every text field is
//! percent-decoded before it leaves this crate:
//! - `/api_category.php` → [`Category`](trivia_core::Category) list
//! - `/api.php` → [`Question`](trivia_core::Question) list
//! - `/api_token.php` → session token request and reset
//!
//! Each call is a single attempt. There are no retries and no caching.

pub mod categories;
pub mod dashboard;
pub mod normalize;
pub mod questions;
pub mod token;

mod error;
mod http;

pub use error::{ErrorKind, TriviaError};
pub use normalize::{ResponseCode, check_response_code, decode_field};
pub use questions::QuestionQuery;

use std::time::Duration;

/// Public Open Trivia DB host.
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// Connection settings for [`TriviaClient::with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Scheme and host, without a trailing path (e.g. `https://opentdb.com`).
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: "trivia-dashboard/0.1".to_string(),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the trivia service.
#[derive(Debug, Clone)]
pub struct TriviaClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for TriviaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TriviaClient {
    /// Create a client against the public service with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default()).expect("reqwest client should build")
    }

    /// Create a client with explicit connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`TriviaError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_options(options: ClientOptions) -> Result<Self, TriviaError> {
        let http = reqwest::Client::builder()
            .user_agent(options.user_agent)
            .timeout(options.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path_and_query: &str) -> String {
        format!("{}/{path_and_query}", self.base_url)
    }
}
