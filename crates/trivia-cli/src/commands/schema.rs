use schemars::schema_for;
use trivia_core::{AggregateEntry, Category, Question, ViewModel};

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `trivia schema`. Needs no config or network.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render_schema(args.type_name, flags.format)?);
    Ok(())
}

fn render_schema(type_name: SchemaType, format: OutputFormat) -> anyhow::Result<String> {
    let schema = match type_name {
        SchemaType::View => schema_for!(ViewModel),
        SchemaType::Category => schema_for!(Category),
        SchemaType::Question => schema_for!(Question),
        SchemaType::Aggregate => schema_for!(AggregateEntry),
    };

    let rendered = match format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    Ok(rendered)
}
