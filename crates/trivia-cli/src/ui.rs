//! Terminal capabilities resolved once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::output::TableOptions;

/// Narrower `COLUMNS` values are ignored; the dashboard bars need the room.
const MIN_TABLE_WIDTH: usize = 40;

/// What stdout can show for this run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Terminal {
    table: TableOptions,
    spinner: bool,
}

/// Raw facts about the process environment.
struct Environment {
    is_tty: bool,
    no_color: bool,
    columns: Option<String>,
}

impl Terminal {
    fn resolve(flags: &GlobalFlags, env: &Environment) -> Self {
        let table_output = flags.format == OutputFormat::Table;
        let color = table_output
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => env.is_tty && !flags.quiet && !env.no_color,
            };
        let max_width = env
            .columns
            .as_deref()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= MIN_TABLE_WIDTH);

        Self {
            table: TableOptions { max_width, color },
            spinner: env.is_tty && !flags.quiet && flags.format != OutputFormat::Json,
        }
    }
}

static TERMINAL: OnceLock<Terminal> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let env = Environment {
        is_tty: std::io::stdout().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: std::env::var("COLUMNS").ok(),
    };
    let _ = TERMINAL.set(Terminal::resolve(flags, &env));
}

fn terminal() -> Terminal {
    TERMINAL.get().copied().unwrap_or_default()
}

/// Layout for table output. Plain and unbounded before [`init`].
#[must_use]
pub fn table_options() -> TableOptions {
    terminal().table
}

#[must_use]
pub fn spinner_enabled() -> bool {
    terminal().spinner
}
