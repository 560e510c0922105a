//! Progress bar display for bundling

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for bundle concatenation
pub struct BundleProgress {
    bar: ProgressBar,
}

impl BundleProgress {
    /// Create a new progress display with the total module count
    pub fn new(total_modules: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_modules);
        bar.set_style(style);

        Self { bar }
    }

    /// Record one module as concatenated
    pub fn advance(&self, name: &str) {
        self.bar.set_message(name.to_string());
        self.bar.inc(1);
    }

    /// Clear the bar once the bundle is written
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
