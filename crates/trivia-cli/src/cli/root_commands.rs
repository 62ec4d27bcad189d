use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List trivia categories.
    Categories,
    /// Fetch a batch of questions.
    Questions(QuestionsArgs),
    /// Session token management.
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },
    /// Questions by category and difficulty.
    Dashboard(DashboardArgs),
    /// Print the JSON Schema of a read-model type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct QuestionsArgs {
    /// Number of questions (defaults to `general.default_amount`).
    #[arg(short, long)]
    pub amount: Option<u32>,

    /// Category id filter.
    #[arg(short, long)]
    pub category: Option<u32>,

    /// Existing session token.
    #[arg(long, conflicts_with = "session")]
    pub token: Option<String>,

    /// Request a fresh session token first.
    #[arg(long)]
    pub session: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum TokenCommands {
    /// Request a new session token.
    Request,
    /// Reset an exhausted session token.
    Reset {
        /// Token to reset.
        token: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Number of questions to aggregate (defaults to `general.default_amount`).
    #[arg(short, long)]
    pub amount: Option<u32>,

    /// Select a category by id.
    #[arg(short, long, conflicts_with = "category_name")]
    pub category: Option<u32>,

    /// Select a category by display name, as a bar click would.
    #[arg(long)]
    pub category_name: Option<String>,

    /// Ignore `general.default_category` and show all categories.
    #[arg(long, conflicts_with_all = ["category", "category_name"])]
    pub all: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    View,
    Category,
    Question,
    Aggregate,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
