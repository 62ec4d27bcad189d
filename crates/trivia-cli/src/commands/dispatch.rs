use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `schema` runs without configuration; every other command loads config and
/// builds the client first.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Categories => commands::categories::handle(&context()?, flags).await,
        Commands::Questions(args) => commands::questions::handle(&args, &context()?, flags).await,
        Commands::Token { action } => commands::token::handle(&action, &context()?, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, &context()?, flags).await,
    }
}

fn context() -> anyhow::Result<AppContext> {
    AppContext::init().context("failed to initialize trivia context")
}
