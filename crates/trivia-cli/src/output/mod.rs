use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::TableOptions;

/// Responses that know how to lay themselves out as a terminal table.
pub trait Tabular {
    fn to_table(&self, options: TableOptions) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(value.to_table(ui::table_options())),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{TableOptions, Tabular, render, table::render_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        key: &'static str,
        count: usize,
    }

    impl Tabular for Example {
        fn to_table(&self, options: TableOptions) -> String {
            render_table(
                &["key", "count"],
                &[vec![self.key.to_string(), self.count.to_string()]],
                options,
            )
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { key: "easy", count: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["key"], "easy");
        assert_eq!(parsed["count"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { key: "easy", count: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_uses_tabular_impl() {
        let value = Example { key: "easy", count: 7 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("easy"));
    }
}
