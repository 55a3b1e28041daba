use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(120);

/// Reply-wait indicator drawn on stderr while the send control is disabled.
///
/// Shows how long the turn has been outstanding. Dropping it erases the line.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner().with_message(message.to_string());
        if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg} {elapsed:.dim}")
        {
            bar.set_style(style.tick_chars("◐◓◑◒ "));
        }
        bar.enable_steady_tick(TICK);
        Self { bar }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
