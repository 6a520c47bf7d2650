//! Progress bar display for copy runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the requested coordinates
pub struct ProgressDisplay {
    coordinate_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with the total coordinate count
    pub fn new(total_coordinates: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let coordinate_pb = ProgressBar::new(total_coordinates);
        coordinate_pb.set_style(style);

        Self { coordinate_pb }
    }

    /// Update to show the coordinate currently being processed
    pub fn update(&self, token: &str, current: usize, total: usize) {
        self.coordinate_pb
            .set_message(format!("({}/{}) {}", current, total, token));
    }

    /// Increment coordinate progress
    pub fn inc(&self) {
        self.coordinate_pb.inc(1);
    }

    /// Finish the bar
    pub fn finish(&self) {
        self.coordinate_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.coordinate_pb.abandon();
    }
}
