//! # trivia-core
//!
//! Domain records and the pure half of the trivia dashboard pipeline.
//!
//! This crate provides the types shared by the HTTP client and the view layer:
//! - Entity structs for categories and questions, already decoded
//! - The `group_by` aggregator and count-descending ordering
//! - Per-source fetch state with a composite combinator
//! - Category selection and the `derive_view` read model
//! - The `Dashboard` holder that ties fetch states and selection together
//!
//! Nothing here performs I/O. Fetching lives in `trivia-client`.

pub mod aggregate;
pub mod dashboard;
pub mod entities;
pub mod errors;
pub mod fetch_state;
pub mod selection;
pub mod view;

pub use aggregate::{AggregateEntry, group_by, sort_by_count_desc};
pub use dashboard::{Dashboard, DashboardStatus};
pub use entities::{Category, Question};
pub use errors::CoreError;
pub use fetch_state::{FetchState, combine};
pub use selection::SelectionState;
pub use view::{ViewModel, derive_view};
