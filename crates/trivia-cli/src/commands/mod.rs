pub mod categories;
pub mod dashboard;
pub mod dispatch;
pub mod questions;
pub mod schema;
pub mod token;
