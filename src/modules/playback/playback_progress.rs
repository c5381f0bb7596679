use std::time::Duration;

/// Position of a playing video within its total length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackProgress {
    elapsed: Duration,
    total: Duration,
}

impl PlaybackProgress {
    /// Creates a new PlaybackProgress instance
    ///
    /// # Arguments
    /// * `elapsed` - Current playback position
    /// * `total` - Total media length
    ///
    /// # Returns
    /// * `Some(PlaybackProgress)` if the total length is known (> 0)
    /// * `None` if the total is zero, meaning metadata is not loaded yet
    pub fn new(elapsed: Duration, total: Duration) -> Option<Self> {
        if total.is_zero() {
            return None;
        }

        Some(Self {
            elapsed: elapsed.min(total),
            total,
        })
    }

    /// Returns the ratio of progress (0.0 to 1.0)
    pub fn ratio(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.total.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn total(&self) -> Duration {
        self.total
    }
}
