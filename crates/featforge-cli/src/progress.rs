//! Progress bar adapter over the core [`ProgressSink`] port.
//!
//! Advisory display only: the core reports fractions at a few fixed points
//! and this adapter paints them. In quiet mode (or when piped) the sink is
//! a no-op.

use indicatif::{ProgressBar, ProgressStyle};

use featforge_core::application::ports::ProgressSink;

/// Terminal progress bar for one generation run.
pub struct IndicatifProgress {
    bar: ProgressBar,
}

impl IndicatifProgress {
    /// A visible bar scaled to per-mille so fractional updates stay smooth.
    pub fn new() -> Self {
        let bar = ProgressBar::new(1000);
        bar.set_style(
            ProgressStyle::with_template("{bar:30.cyan/dim} {percent:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    /// A hidden bar, used with `--quiet` or non-TTY output.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Clear the bar once generation is done.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for IndicatifProgress {
    fn update(&self, fraction: f64, message: &str) {
        let clamped = fraction.clamp(0.0, 1.0);
        self.bar.set_position((clamped * 1000.0) as u64);
        self.bar.set_message(message.to_string());
    }
}
