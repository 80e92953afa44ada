use indicatif::{ProgressBar, ProgressStyle};

/// Returns a percent progress bar with the given prefix.
pub fn make_progress_bar(prefix: &'static str, visible: bool) -> ProgressBar {
    let pb = if visible {
        ProgressBar::new(100)
    } else {
        ProgressBar::hidden()
    };
    pb.set_prefix(prefix);
    pb.set_style(
        ProgressStyle::with_template("{prefix}: [{bar:20.cyan/blue}] {pos}%")
            .expect("incorrect progress bar format string")
            .progress_chars("#>-"),
    );
    pb
}
