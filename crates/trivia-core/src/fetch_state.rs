//! Per-source fetch lifecycle.
//!
//! ```text
//! loading → ready(data)
//!         → failed(message)
//! ```
//!
//! Leaving `ready` or `failed` takes a new fetch, which starts again at
//! `loading`. Two independent sources merge into one composite state with
//! [`combine`].

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    /// Settle a fetch outcome. Errors keep only their display message.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(error) => Self::Failed(error.to_string()),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

/// Merge two independent sources into one composite state.
///
/// Either side failed → failed (the first argument's error wins when both
/// failed). Both ready → ready. Anything else is still loading.
pub fn combine<'a, A, B>(
    first: &'a FetchState<A>,
    second: &'a FetchState<B>,
) -> FetchState<(&'a A, &'a B)> {
    match (first, second) {
        (FetchState::Failed(message), _) | (_, FetchState::Failed(message)) => {
            FetchState::Failed(message.clone())
        }
        (FetchState::Ready(a), FetchState::Ready(b)) => FetchState::Ready((a, b)),
        _ => FetchState::Loading,
    }
}
