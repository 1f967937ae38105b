//! Progress indicator for the record stream.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Cadence of the background redraw thread.
const REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// Visual progress over the record stream.
///
/// Built with the expected record total when one was supplied on the command
/// line; without a total every call is a no-op. The indicator is strictly
/// observational: it reads nothing from and writes nothing to the
/// accumulators, and the redraw thread only repaints the bar.
pub struct RecordProgress {
    bar: Option<ProgressBar>,
}

impl RecordProgress {
    /// Create an indicator for `total` expected records, or a disabled one.
    pub fn new(total: Option<u64>) -> Self {
        let bar = total.map(|len| {
            let pb = ProgressBar::new(len);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(" processing [{bar:20}] {per_sec} {percent}% {eta}")
                    .unwrap()
                    .progress_chars("= "),
            );
            pb.enable_steady_tick(REDRAW_INTERVAL);
            pb
        });

        Self { bar }
    }

    /// Whether a bar is actually being drawn.
    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Advance one unit for a processed record.
    pub fn tick(&self) {
        if let Some(ref pb) = self.bar {
            pb.inc(1);
        }
    }

    /// Stop the redraw thread and leave the final state on screen.
    pub fn finish(&self) {
        if let Some(ref pb) = self.bar {
            pb.finish();
        }
    }
}
