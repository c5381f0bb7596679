use crate::core::config::PlaybackConfig;
use crate::core::models::{MediaItem, MediaKind, SlideDuration};
use crate::modules::playback::playback_progress::PlaybackProgress;
use std::time::Duration;

/// What a timer input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Progress moved but the slide is not done
    Progressed,
    /// Slide just reached completion; reported once per timer
    Completed,
    /// Input did not apply (wrong strategy, unknown duration, already complete)
    Ignored,
}

/// Countdown for image slides, advanced by fixed ticks.
///
/// Elapsed time is kept in whole milliseconds so completion lands exactly on
/// the tick that reaches the duration.
#[derive(Debug, Clone)]
pub struct FixedTimer {
    duration_ms: u64,
    tick_ms: u64,
    elapsed_ms: u64,
    completed: bool,
}

impl FixedTimer {
    pub fn new(duration: Duration, tick: Duration) -> Self {
        Self {
            duration_ms: (duration.as_millis() as u64).max(1),
            tick_ms: (tick.as_millis() as u64).max(1),
            elapsed_ms: 0,
            completed: false,
        }
    }

    fn on_tick(&mut self) -> TimerOutcome {
        if self.completed {
            return TimerOutcome::Ignored;
        }

        self.elapsed_ms = (self.elapsed_ms + self.tick_ms).min(self.duration_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.completed = true;
            TimerOutcome::Completed
        } else {
            TimerOutcome::Progressed
        }
    }

    fn progress(&self) -> f64 {
        self.elapsed_ms as f64 / self.duration_ms as f64
    }
}

/// Progress for video slides, sampled from the surface's playback position
#[derive(Debug, Clone)]
pub struct PlaybackDrivenTimer {
    hint: Duration,
    threshold: f64,
    last: Option<PlaybackProgress>,
    completed: bool,
}

impl PlaybackDrivenTimer {
    pub fn new(hint: Duration, threshold: f64) -> Self {
        Self {
            hint,
            threshold,
            last: None,
            completed: false,
        }
    }

    fn on_position(&mut self, current: Duration, total: Option<Duration>) -> TimerOutcome {
        if self.completed {
            return TimerOutcome::Ignored;
        }

        // No duration yet: wait for metadata rather than guessing a length.
        let Some(sample) = total.and_then(|t| PlaybackProgress::new(current, t)) else {
            return TimerOutcome::Ignored;
        };

        self.last = Some(sample);
        if sample.ratio() >= self.threshold {
            self.completed = true;
            TimerOutcome::Completed
        } else {
            TimerOutcome::Progressed
        }
    }

    fn progress(&self) -> f64 {
        if self.completed {
            return 1.0;
        }
        self.last.map(|p| p.ratio()).unwrap_or(0.0)
    }

    /// Real media length once the surface has reported it
    pub fn media_length(&self) -> Option<Duration> {
        self.last.map(|p| p.total())
    }
}

/// Per-slide duration strategy, chosen by media kind
#[derive(Debug, Clone)]
pub enum SlideTimer {
    Fixed(FixedTimer),
    PlaybackDriven(PlaybackDrivenTimer),
}

impl SlideTimer {
    /// Fresh timer for a slide.
    ///
    /// Placeholders count as images: the title card runs the fixed timer and
    /// auto-advances like any other image slide.
    pub fn for_item(item: &MediaItem, config: &PlaybackConfig) -> Self {
        match item.kind {
            MediaKind::Video if !item.is_placeholder() => SlideTimer::PlaybackDriven(
                PlaybackDrivenTimer::new(
                    config.video_duration_hint(),
                    config.video_completion_threshold,
                ),
            ),
            _ => SlideTimer::Fixed(FixedTimer::new(
                config.image_duration(),
                config.tick_interval(),
            )),
        }
    }

    /// Feed one fixed-interval tick
    pub fn on_tick(&mut self) -> TimerOutcome {
        match self {
            SlideTimer::Fixed(timer) => timer.on_tick(),
            SlideTimer::PlaybackDriven(_) => TimerOutcome::Ignored,
        }
    }

    /// Feed one playback-position report
    pub fn on_position(&mut self, current: Duration, total: Option<Duration>) -> TimerOutcome {
        match self {
            SlideTimer::Fixed(_) => TimerOutcome::Ignored,
            SlideTimer::PlaybackDriven(timer) => timer.on_position(current, total),
        }
    }

    pub fn progress(&self) -> f64 {
        match self {
            SlideTimer::Fixed(timer) => timer.progress(),
            SlideTimer::PlaybackDriven(timer) => timer.progress(),
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            SlideTimer::Fixed(timer) => timer.completed,
            SlideTimer::PlaybackDriven(timer) => timer.completed,
        }
    }

    pub fn duration(&self) -> SlideDuration {
        match self {
            SlideTimer::Fixed(timer) => {
                SlideDuration::Fixed(Duration::from_millis(timer.duration_ms))
            }
            SlideTimer::PlaybackDriven(timer) => SlideDuration::PlaybackDriven {
                hint: timer.hint,
                length: timer.media_length(),
            },
        }
    }
}
