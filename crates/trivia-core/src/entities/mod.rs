//! Entity structs for the trivia domain.
//!
//! Both records arrive percent-encoded from the remote service and are only
//! constructed here after every text field has been decoded. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod category;
mod question;

pub use category::Category;
pub use question::Question;
