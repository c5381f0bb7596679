use crate::core::events::{ControlEvent, SlideTag};
use crate::core::models::SlideDuration;
use crossbeam_channel::{Receiver, tick};
use std::time::{Duration, Instant};

enum ClockSource {
    /// Fixed-interval ticks for image slides
    Timer,
    /// Stand-in for a video element: position advances with wall time while playing
    SimulatedVideo {
        total: Duration,
        played: Duration,
        resumed_at: Option<Instant>,
    },
}

/// The host's single clock for the current slide.
///
/// Replaced on every slide change; dropping it drops its tick receiver, so no
/// further callbacks are produced for the old slide.
pub struct SlideClock {
    tag: SlideTag,
    ticks: Receiver<Instant>,
    source: ClockSource,
}

impl SlideClock {
    pub fn start(
        tag: SlideTag,
        duration: SlideDuration,
        tick_interval: Duration,
        report_interval: Duration,
    ) -> Self {
        Self::start_at(tag, duration, tick_interval, report_interval, Instant::now())
    }

    fn start_at(
        tag: SlideTag,
        duration: SlideDuration,
        tick_interval: Duration,
        report_interval: Duration,
        now: Instant,
    ) -> Self {
        match duration {
            SlideDuration::Fixed(_) => Self {
                tag,
                ticks: tick(tick_interval),
                source: ClockSource::Timer,
            },
            SlideDuration::PlaybackDriven { hint, .. } => Self {
                tag,
                ticks: tick(report_interval),
                source: ClockSource::SimulatedVideo {
                    total: hint,
                    played: Duration::ZERO,
                    resumed_at: Some(now),
                },
            },
        }
    }

    pub fn tag(&self) -> SlideTag {
        self.tag
    }

    pub fn pause(&mut self, now: Instant) {
        if let ClockSource::SimulatedVideo {
            played, resumed_at, ..
        } = &mut self.source
        {
            if let Some(since) = resumed_at.take() {
                *played += now.saturating_duration_since(since);
            }
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if let ClockSource::SimulatedVideo { resumed_at, .. } = &mut self.source {
            if resumed_at.is_none() {
                *resumed_at = Some(now);
            }
        }
    }

    /// Simulated playback position; `None` for timer clocks
    pub fn position_at(&self, now: Instant) -> Option<Duration> {
        match &self.source {
            ClockSource::Timer => None,
            ClockSource::SimulatedVideo {
                total,
                played,
                resumed_at,
            } => {
                let running = resumed_at
                    .map(|since| now.saturating_duration_since(since))
                    .unwrap_or_default();
                Some((*played + running).min(*total))
            }
        }
    }

    /// The control event this clock produces at `now`
    pub fn event_at(&self, now: Instant) -> ControlEvent {
        match &self.source {
            ClockSource::Timer => ControlEvent::Tick { tag: self.tag },
            ClockSource::SimulatedVideo { total, .. } => ControlEvent::PlaybackPosition {
                tag: self.tag,
                current: self.position_at(now).unwrap_or_default(),
                total: Some(*total),
            },
        }
    }

    /// Non-blocking: the next due event, if a tick has fired
    pub fn poll(&self) -> Option<ControlEvent> {
        self.ticks.try_recv().ok().map(|at| self.event_at(at))
    }
}
