//! Per-file progress on stderr

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Counts finished input files
///
/// A single input gets a hidden bar, so piping one file's records from
/// stdout never interleaves with redraws.
pub struct FileProgress {
    bar: ProgressBar,
}

impl FileProgress {
    /// Start tracking `total` input files
    pub fn start(total: usize, quiet: bool) -> Self {
        if quiet || total < 2 {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("##-"));
        }
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Record that `path` has been fully processed
    pub fn advance(&self, path: &Path) {
        self.bar.set_message(path.display().to_string());
        self.bar.inc(1);
    }

    /// Clear the bar once every file is done
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
