//! Pixel-level progress display for long traversals

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TRAVERSAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} px"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting visited pixels
///
/// Redraws are batched every [`PROGRESS_UPDATE_INTERVAL`] pixels so the
/// per-pixel cost stays a counter increment.
pub struct TraversalProgress {
    bar: ProgressBar,
    pending: u64,
}

impl TraversalProgress {
    /// Create a visible progress bar on stderr
    pub fn new(pixel_count: u64, label: &str) -> Self {
        let bar = ProgressBar::new(pixel_count);
        bar.set_style(TRAVERSAL_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar, pending: 0 }
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            pending: 0,
        }
    }

    /// Record one visited pixel
    pub fn advance(&mut self) {
        self.pending += 1;
        if self.pending >= PROGRESS_UPDATE_INTERVAL {
            self.flush();
        }
    }

    /// Pixels recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position() + self.pending
    }

    /// Flush pending pixels and remove the bar from the terminal
    pub fn finish(&mut self) {
        self.flush();
        self.bar.finish_and_clear();
    }

    fn flush(&mut self) {
        if self.pending > 0 {
            self.bar.inc(self.pending);
            self.pending = 0;
        }
    }
}
