//! Terminal progress for the sheet and set runs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates a progress bar per composition stage plus status lines
///
/// Status lines are printed above the bars so they survive redraws. Bars are
/// cleared when their stage ends, leaving only the status lines behind.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stage_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>8} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stage_bar: None,
        }
    }

    /// Begin a stage of `total` steps, finishing any previous stage
    pub fn start_stage(&mut self, label: &str, total: usize) {
        self.finish_stage();
        let bar = ProgressBar::new(total as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.stage_bar = Some(self.multi_progress.add(bar));
    }

    /// Advance the current stage by one step
    pub fn advance(&self) {
        if let Some(ref bar) = self.stage_bar {
            bar.inc(1);
        }
    }

    /// Print a status line above the bars
    // Allow print for user feedback when no terminal is attached
    #[allow(clippy::print_stdout)]
    pub fn message(&self, line: &str) {
        // Hidden draw targets swallow println
        if self.multi_progress.is_hidden() {
            println!("{line}");
        } else {
            let _ = self.multi_progress.println(line);
        }
    }

    /// Current stage position and length, if a stage is running
    pub fn stage_position(&self) -> Option<(u64, u64)> {
        self.stage_bar
            .as_ref()
            .map(|bar| (bar.position(), bar.length().unwrap_or(0)))
    }

    /// Complete the current stage
    pub fn finish_stage(&mut self) {
        if let Some(bar) = self.stage_bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        self.finish_stage();
        let _ = self.multi_progress.clear();
    }
}
