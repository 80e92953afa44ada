/// Analysis progress, reported in steps of 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Percent complete, a multiple of 10.
    pub percent: u8,

    /// Samples processed so far.
    pub processed: usize,

    /// Samples in the profile.
    pub total: usize,
}

/// Turns per-sample advancement into at most one [`Progress`] per
/// 10% boundary.
#[derive(Debug)]
pub(crate) struct ProgressTracker {
    total: usize,
    last: Option<u8>,
}

impl ProgressTracker {
    pub(crate) fn new(total: usize) -> Self {
        Self { total, last: None }
    }

    /// Records that sample `idx` (0-based) is done. Returns progress
    /// when a new 10% boundary has been reached.
    ///
    /// The percent counts samples already processed, `idx + 1`, and is
    /// floored to a multiple of 10, so the last sample always reports
    /// 100.
    pub(crate) fn advance(&mut self, idx: usize) -> Option<Progress> {
        let processed = idx + 1;
        #[allow(clippy::cast_possible_truncation)]
        let percent = ((processed * 100 / self.total) / 10 * 10) as u8;
        match self.last {
            Some(last) if percent <= last => None,
            _ => {
                self.last = Some(percent);
                Some(Progress {
                    percent,
                    processed,
                    total: self.total,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressTracker;

    #[test]
    fn test_progress_51_samples() {
        let mut tracker = ProgressTracker::new(51);
        let percents: Vec<u8> = (0..51)
            .filter_map(|idx| tracker.advance(idx))
            .map(|progress| progress.percent)
            .collect();
        assert_eq!(percents, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_progress_few_samples() {
        let mut tracker = ProgressTracker::new(3);
        let progress: Vec<_> = (0..3).filter_map(|idx| tracker.advance(idx)).collect();
        let percents: Vec<u8> = progress.iter().map(|p| p.percent).collect();
        assert_eq!(percents, vec![30, 60, 100]);
        assert_eq!(progress[2].processed, 3);
        assert_eq!(progress[2].total, 3);
    }

    #[test]
    fn test_progress_single_sample() {
        let mut tracker = ProgressTracker::new(1);
        assert_eq!(tracker.advance(0).map(|p| p.percent), Some(100));
    }
}
