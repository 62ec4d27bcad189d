//! The derived read model consumed by the view layer.
//!
//! [`derive_view`] is recomputed explicitly after every fetch completion and
//! every selection transition. There is no hidden re-evaluation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateEntry, group_by, sort_by_count_desc};
use crate::entities::{Category, Question};
use crate::selection::{SelectionState, filter_questions};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ViewModel {
    /// The resolved selection, if any. `None` shows every category.
    pub selected_category: Option<Category>,
    pub filtered_questions: Vec<Question>,
    /// Sorted by count, largest first.
    pub category_aggregate: Vec<AggregateEntry>,
    /// First-seen order.
    pub difficulty_aggregate: Vec<AggregateEntry>,
}

impl ViewModel {
    /// A successful load with nothing to show. Never an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filtered_questions.is_empty()
    }
}

/// Build the read model from whatever data is available.
///
/// Missing categories mean the selection cannot be resolved, so every
/// question is shown. Missing questions yield an empty model.
#[must_use]
pub fn derive_view(
    categories: Option<&[Category]>,
    questions: Option<&[Question]>,
    selection: SelectionState,
) -> ViewModel {
    let selected_category = categories.and_then(|cats| selection.resolve(cats)).cloned();
    let filtered_questions =
        filter_questions(questions.unwrap_or_default(), selected_category.as_ref());

    let category_aggregate =
        sort_by_count_desc(group_by(&filtered_questions, |q| q.category.as_str()));
    let difficulty_aggregate = group_by(&filtered_questions, |q| q.difficulty.as_str());

    ViewModel {
        selected_category,
        filtered_questions,
        category_aggregate,
        difficulty_aggregate,
    }
}
