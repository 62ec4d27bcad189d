//! Stateful holder for one dashboard session.
//!
//! Owns the two fetch states and the selection. Completions and selection
//! transitions are the only mutators; [`Dashboard::status`] re-derives the
//! read model on every call.

use std::fmt;

use serde::Serialize;

use crate::entities::{Category, Question};
use crate::errors::CoreError;
use crate::fetch_state::{FetchState, combine};
use crate::selection::SelectionState;
use crate::view::{ViewModel, derive_view};

/// Composite status handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum DashboardStatus {
    Loading,
    Failed(String),
    Ready(ViewModel),
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    categories: FetchState<Vec<Category>>,
    questions: FetchState<Vec<Question>>,
    selection: SelectionState,
}

impl Dashboard {
    /// Both sources loading, no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart both sources. The selection is kept.
    pub fn refetch(&mut self) {
        self.categories = FetchState::Loading;
        self.questions = FetchState::Loading;
    }

    pub fn complete_categories<E: fmt::Display>(&mut self, result: Result<Vec<Category>, E>) {
        self.categories = FetchState::from_result(result);
    }

    pub fn complete_questions<E: fmt::Display>(&mut self, result: Result<Vec<Question>, E>) {
        self.questions = FetchState::from_result(result);
    }

    #[must_use]
    pub const fn categories(&self) -> &FetchState<Vec<Category>> {
        &self.categories
    }

    #[must_use]
    pub const fn questions(&self) -> &FetchState<Vec<Question>> {
        &self.questions
    }

    #[must_use]
    pub const fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn select_category(&mut self, id: u32) {
        tracing::debug!(category_id = id, "category selected");
        self.selection = self.selection.select_category(id);
    }

    /// Resolve a category name (e.g. a clicked bar) and select it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotLoaded`] while categories are not ready and
    /// [`CoreError::NotFound`] if no loaded category has that name. The
    /// selection is unchanged in both cases.
    pub fn select_category_by_name(&mut self, name: &str) -> Result<(), CoreError> {
        let categories = self
            .categories
            .data()
            .ok_or(CoreError::NotLoaded("categories"))?;
        let id = categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| category.id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "category".to_string(),
                id: name.to_string(),
            })?;
        self.select_category(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        tracing::debug!("category selection cleared");
        self.selection = self.selection.clear_selection();
    }

    /// Read model over whatever has loaded so far.
    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        derive_view(
            self.categories.data().map(Vec::as_slice),
            self.questions.data().map(Vec::as_slice),
            self.selection,
        )
    }

    /// Composite status: ready only when both sources are.
    #[must_use]
    pub fn status(&self) -> DashboardStatus {
        match combine(&self.categories, &self.questions) {
            FetchState::Loading => DashboardStatus::Loading,
            FetchState::Failed(message) => DashboardStatus::Failed(message),
            FetchState::Ready((categories, questions)) => DashboardStatus::Ready(derive_view(
                Some(categories.as_slice()),
                Some(questions.as_slice()),
                self.selection,
            )),
        }
    }
}
