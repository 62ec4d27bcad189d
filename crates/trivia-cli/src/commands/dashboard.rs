use anyhow::Context;
use serde::Serialize;
use trivia_client::QuestionQuery;
use trivia_core::{AggregateEntry, Dashboard, DashboardStatus, SelectionState, ViewModel};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::{TableOptions, Tabular, output, table};
use crate::progress::{Progress, track};

const BAR_WIDTH: usize = 30;
const EMPTY_MESSAGE: &str = "No questions available for this category";

#[derive(Debug, Serialize)]
struct DashboardResponse {
    amount: u32,
    selection: SelectionState,
    view: ViewModel,
}

impl Tabular for DashboardResponse {
    fn to_table(&self, options: TableOptions) -> String {
        let heading = self
            .view
            .selected_category
            .as_ref()
            .map_or("All Categories", |c| c.name.as_str());

        let mut sections = vec![format!(
            "{heading} ({} of {} questions)",
            self.view.filtered_questions.len(),
            self.amount
        )];

        if self.view.is_empty() {
            sections.push(EMPTY_MESSAGE.to_string());
            return sections.join("\n\n");
        }

        sections.push(format!(
            "Questions by Category\n{}",
            aggregate_table(&self.view.category_aggregate, "category", options)
        ));
        sections.push(format!(
            "Questions by Difficulty\n{}",
            aggregate_table(&self.view.difficulty_aggregate, "difficulty", options)
        ));
        sections.join("\n\n")
    }
}

fn aggregate_table(entries: &[AggregateEntry], label: &str, options: TableOptions) -> String {
    let max = entries.iter().map(|e| e.count).max().unwrap_or(0);
    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.key.clone(),
                e.count.to_string(),
                table::bar(e.count, max, BAR_WIDTH),
            ]
        })
        .collect::<Vec<_>>();
    table::render_table(&[label, "count", ""], &rows, options)
}

/// Handle `trivia dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let general = &ctx.config.general;
    let amount = args.amount.unwrap_or(general.default_amount);

    let token = if general.use_session_token {
        Some(track("Requesting session token", ctx.client.get_session_token()).await?)
    } else {
        None
    };
    let query = QuestionQuery::new(amount).token(token);

    let progress = Progress::spinner("Loading categories and questions");
    let mut dashboard = ctx.client.load_dashboard(&query).await;
    progress.finish_clear();

    apply_selection(&mut dashboard, args, general.default_category)?;

    match dashboard.status() {
        DashboardStatus::Ready(view) => output(
            &DashboardResponse {
                amount,
                selection: dashboard.selection(),
                view,
            },
            flags.format,
        ),
        DashboardStatus::Failed(message) => anyhow::bail!("Error loading data: {message}"),
        DashboardStatus::Loading => anyhow::bail!("dashboard sources did not settle"),
    }
}

/// Route every selection source through the dashboard's transitions.
///
/// Precedence: `--all`, then `--category-name`, then `--category`, then the
/// configured default.
fn apply_selection(
    dashboard: &mut Dashboard,
    args: &DashboardArgs,
    default_category: Option<u32>,
) -> anyhow::Result<()> {
    if args.all {
        dashboard.clear_selection();
        return Ok(());
    }

    if let Some(name) = &args.category_name {
        return dashboard
            .select_category_by_name(name)
            .with_context(|| format!("cannot select category '{name}'"));
    }

    if let Some(id) = args.category.or(default_category) {
        dashboard.select_category(id);
        let known = dashboard
            .categories()
            .data()
            .is_some_and(|cats| cats.iter().any(|c| c.id == id));
        if !known {
            tracing::warn!(category_id = id, "unknown category id; showing all categories");
        }
    }

    Ok(())
}
