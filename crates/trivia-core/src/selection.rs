//! Category selection.
//!
//! ```text
//! all ⇄ category(id)
//! ```
//!
//! `None` means "all categories". Every trigger (picker, bar click, reset)
//! funnels into [`SelectionState::select_category`] or
//! [`SelectionState::clear_selection`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Category, Question};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectionState {
    pub selected_category_id: Option<u32>,
}

impl SelectionState {
    /// Initial state: no filter.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            selected_category_id: None,
        }
    }

    #[must_use]
    pub const fn select_category(self, id: u32) -> Self {
        Self {
            selected_category_id: Some(id),
        }
    }

    #[must_use]
    pub const fn clear_selection(self) -> Self {
        Self::all()
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.selected_category_id.is_none()
    }

    /// Look up the selected category. `None` for "all" or an unknown id.
    #[must_use]
    pub fn resolve<'a>(&self, categories: &'a [Category]) -> Option<&'a Category> {
        let id = self.selected_category_id?;
        categories.iter().find(|category| category.id == id)
    }
}

/// Questions visible under `selected`. `None` keeps everything.
#[must_use]
pub fn filter_questions(questions: &[Question], selected: Option<&Category>) -> Vec<Question> {
    match selected {
        Some(category) => questions
            .iter()
            .filter(|question| question.belongs_to(category))
            .cloned()
            .collect(),
        None => questions.to_vec(),
    }
}
