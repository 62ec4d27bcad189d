use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named grouping of questions. `id` is unique within one fetch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
