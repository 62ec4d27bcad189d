use serde::Serialize;
use trivia_core::Category;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{TableOptions, Tabular, output, table::render_table};
use crate::progress::track;

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
    total: usize,
}

impl Tabular for CategoriesResponse {
    fn to_table(&self, options: TableOptions) -> String {
        let rows = self
            .categories
            .iter()
            .map(|c| vec![c.id.to_string(), c.name.clone()])
            .collect::<Vec<_>>();
        render_table(&["id", "name"], &rows, options)
    }
}

/// Handle `trivia categories`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories = track("Fetching categories", ctx.client.fetch_categories()).await?;
    output(
        &CategoriesResponse {
            total: categories.len(),
            categories,
        },
        flags.format,
    )
}
