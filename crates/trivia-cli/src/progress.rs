use std::fmt;
use std::future::Future;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner shown while a network call is in flight. Inert when progress is
/// disabled (non-TTY, `--quiet`, or JSON output).
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::spinner_enabled() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

/// Run `work` under a spinner, clearing it on success and leaving the error
/// message behind on failure.
pub async fn track<T, E, F>(message: &str, work: F) -> Result<T, E>
where
    E: fmt::Display,
    F: Future<Output = Result<T, E>>,
{
    let progress = Progress::spinner(message);
    let result = work.await;
    match &result {
        Ok(_) => progress.finish_clear(),
        Err(error) => progress.finish_err(&error.to_string()),
    }
    result
}
