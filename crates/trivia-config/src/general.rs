//! Dashboard defaults.

use serde::{Deserialize, Serialize};

/// Default number of questions per dashboard load.
const fn default_amount() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Questions requested per load.
    #[serde(default = "default_amount")]
    pub default_amount: u32,

    /// Category id selected on startup. Unset means all categories.
    #[serde(default)]
    pub default_category: Option<u32>,

    /// Request a session token before fetching questions.
    #[serde(default)]
    pub use_session_token: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_amount: default_amount(),
            default_category: None,
            use_session_token: false,
        }
    }
}
