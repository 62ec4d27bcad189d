use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TokenCommands;
use crate::context::AppContext;
use crate::output::{TableOptions, Tabular, output, table::render_table};
use crate::progress::track;

#[derive(Debug, Serialize)]
struct TokenResponse {
    action: &'static str,
    token: String,
}

impl Tabular for TokenResponse {
    fn to_table(&self, options: TableOptions) -> String {
        render_table(
            &["action", "token"],
            &[vec![self.action.to_string(), self.token.clone()]],
            options,
        )
    }
}

/// Handle `trivia token <action>`.
pub async fn handle(
    action: &TokenCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match action {
        TokenCommands::Request => TokenResponse {
            action: "request",
            token: track("Requesting session token", ctx.client.get_session_token()).await?,
        },
        TokenCommands::Reset { token } => TokenResponse {
            action: "reset",
            token: track(
                "Resetting session token",
                ctx.client.reset_session_token(token),
            )
            .await?,
        },
    };
    output(&response, flags.format)
}
