use crate::core::models::{MediaItem, SlideDuration};
use std::time::Duration;

/// Identity of one slide instance.
///
/// `generation` grows on every slide start, so revisiting an index still
/// produces a fresh tag and late callbacks for the old instance are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideTag {
    pub index: usize,
    pub generation: u64,
}

/// Why the viewer closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Advanced past the last slide
    Completed,
    /// User closed the viewer
    Dismissed,
    /// Nothing to show
    Empty,
}

/// Inputs consumed by the story controller
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Fixed-timer tick for the tagged slide
    Tick { tag: SlideTag },

    /// Playback position reported by the surface for a video slide.
    /// `total` is `None` while metadata is still loading.
    PlaybackPosition {
        tag: SlideTag,
        current: Duration,
        total: Option<Duration>,
    },

    /// Tap at `x` on a surface `width` wide
    Tap { x: f64, width: f64 },

    /// Explicit "next" intent
    Next,

    /// Explicit "previous" intent
    Previous,

    /// Explicit close action
    Close,

    Pause,

    Resume,

    TogglePause,
}

/// Notifications emitted by the story controller
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// A slide became current (also emitted for the first slide on open)
    SlideChanged {
        index: usize,
        count: usize,
        item: MediaItem,
        duration: SlideDuration,
        tag: SlideTag,
    },

    /// Playback paused
    Paused,

    /// Playback resumed
    Resumed,

    /// Terminal: the viewer is closed and the controller is spent
    Closed { reason: CloseReason },
}

/// Type alias for control event sender
pub type ControlSender = crossbeam_channel::Sender<ControlEvent>;

/// Type alias for control event receiver
pub type ControlReceiver = crossbeam_channel::Receiver<ControlEvent>;

/// Type alias for viewer event sender
pub type ViewerEventSender = crossbeam_channel::Sender<ViewerEvent>;

/// Type alias for viewer event receiver
pub type ViewerEventReceiver = crossbeam_channel::Receiver<ViewerEvent>;
