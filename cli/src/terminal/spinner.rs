use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TICK_FRAMES: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// In-progress feedback for the two slow stages (scan, summary request).
/// The pipeline updates the message through its progress callback.
pub struct ScanSpinner {
    pb: ProgressBar,
}

pub fn start(msg: String) -> ScanSpinner {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .expect("spinner template is valid")
        .tick_strings(TICK_FRAMES);

    pb.set_style(style);
    pb.enable_steady_tick(TICK_INTERVAL);
    pb.set_message(msg);

    ScanSpinner { pb }
}

impl ScanSpinner {
    pub fn update(&self, msg: String) {
        self.pb.set_message(msg);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
