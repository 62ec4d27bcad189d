use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Category;

/// A single trivia question with every text field decoded.
///
/// Questions link to categories by display name, not by id. That join is
/// isolated in [`Question::belongs_to`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// Whether this question is filed under `category`.
    #[must_use]
    pub fn belongs_to(&self, category: &Category) -> bool {
        self.category == category.name
    }
}
