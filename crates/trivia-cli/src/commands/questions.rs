use serde::Serialize;
use trivia_client::QuestionQuery;
use trivia_core::Question;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuestionsArgs;
use crate::context::AppContext;
use crate::output::{TableOptions, Tabular, output, table::render_table};
use crate::progress::track;

#[derive(Debug, Serialize)]
struct QuestionsResponse {
    amount: u32,
    category: Option<u32>,
    /// Token used for the request, so follow-up calls can reuse it.
    token: Option<String>,
    questions: Vec<Question>,
}

impl Tabular for QuestionsResponse {
    fn to_table(&self, options: TableOptions) -> String {
        let rows = self
            .questions
            .iter()
            .map(|q| {
                vec![
                    q.difficulty.clone(),
                    q.kind.clone(),
                    q.category.clone(),
                    q.question.clone(),
                    q.correct_answer.clone(),
                ]
            })
            .collect::<Vec<_>>();
        render_table(
            &["difficulty", "type", "category", "question", "answer"],
            &rows,
            options,
        )
    }
}

/// Handle `trivia questions`.
pub async fn handle(
    args: &QuestionsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let amount = args.amount.unwrap_or(ctx.config.general.default_amount);
    let category = args.category.or(ctx.config.general.default_category);

    let token = if args.session {
        Some(track("Requesting session token", ctx.client.get_session_token()).await?)
    } else {
        args.token.clone()
    };

    let query = QuestionQuery::new(amount)
        .category(category)
        .token(token.clone());
    let questions = track("Fetching questions", ctx.client.fetch_questions_with(&query)).await?;

    output(
        &QuestionsResponse {
            amount,
            category,
            token,
            questions,
        },
        flags.format,
    )
}
