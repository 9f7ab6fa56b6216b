use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Counts finished line translations against the total.
///
/// Clears itself when dropped, like [`super::Spinner`].
pub struct LineProgress {
    progress_bar: ProgressBar,
}

impl LineProgress {
    #[allow(clippy::unwrap_used)]
    pub fn new(total: usize, hidden: bool) -> Self {
        if hidden {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let progress_bar = ProgressBar::new(total as u64);
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} Translating lines [{bar:30}] {pos}/{len}")
                .unwrap()
                .progress_chars("=> "),
        );
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Marks one more line as finished.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Runs `f` with the bar hidden so printed lines don't tear it.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}

impl Drop for LineProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
