//! Concurrent dashboard load.
//!
//! Categories and questions are fetched side by side. Either may finish
//! first and one failing does not cancel the other; each outcome lands in
//! its own [`FetchState`](trivia_core::FetchState) and the composite status
//! is derived by [`Dashboard::status`].

use trivia_core::Dashboard;

use crate::{QuestionQuery, TriviaClient};

impl TriviaClient {
    /// Fetch both dashboard sources concurrently into a fresh [`Dashboard`].
    pub async fn load_dashboard(&self, query: &QuestionQuery) -> Dashboard {
        let mut dashboard = Dashboard::new();
        self.reload_dashboard(&mut dashboard, query).await;
        dashboard
    }

    /// Re-run both fetches for an existing dashboard, keeping its selection.
    pub async fn reload_dashboard(&self, dashboard: &mut Dashboard, query: &QuestionQuery) {
        dashboard.refetch();

        let (categories, questions) =
            tokio::join!(self.fetch_categories(), self.fetch_questions_with(query));

        if let Err(e) = &categories {
            tracing::warn!(%e, "categories fetch failed");
        }
        if let Err(e) = &questions {
            tracing::warn!(%e, "questions fetch failed");
        }

        dashboard.complete_categories(categories);
        dashboard.complete_questions(questions);
    }
}
