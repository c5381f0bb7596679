use crate::core::config::PlaybackConfig;
use crate::core::events::{CloseReason, ControlEvent, SlideTag, ViewerEvent, ViewerEventSender};
use crate::core::models::{MediaItem, MediaList, PlaybackState, SlideDuration, Story};
use crate::modules::media::media_list::build_media_list;
use crate::modules::playback::navigation::{Intent, Navigator, TapZones, Transition};
use crate::modules::playback::progress_timer::{SlideTimer, TimerOutcome};
use anyhow::{Context, Result};
use tracing::{debug, info, trace};

/// Everything that exists only while the viewer is open
struct Session {
    media: MediaList,
    navigator: Navigator,
    timer: SlideTimer,
    state: PlaybackState,
    tag: SlideTag,
}

/// Story playback controller.
///
/// Owns the media sequence, the index state machine and the one live slide
/// timer. Every input goes through [`StoryController::handle`], one at a time;
/// notifications go out on the viewer event channel. Once closed the session is
/// dropped and the controller ignores all further input. Open a new controller
/// to play again.
pub struct StoryController {
    playback: PlaybackConfig,
    tap_zones: TapZones,
    events: ViewerEventSender,
    session: Option<Session>,
    generation: u64,
}

impl StoryController {
    /// Resolve the story's media and open at the first slide
    pub fn open(
        story: &Story,
        playback: PlaybackConfig,
        tap_zones: TapZones,
        events: ViewerEventSender,
    ) -> Result<Self> {
        let media = build_media_list(story);
        info!(story = %story.id, slides = media.len(), "opening story");
        Self::with_media(media, playback, tap_zones, events)
    }

    /// Open over an already-built sequence.
    ///
    /// An empty sequence never opens: `Closed { reason: Empty }` is emitted
    /// straight away.
    pub fn with_media(
        media: MediaList,
        playback: PlaybackConfig,
        tap_zones: TapZones,
        events: ViewerEventSender,
    ) -> Result<Self> {
        let mut controller = Self {
            playback,
            tap_zones,
            events,
            session: None,
            generation: 0,
        };

        let Some(first) = media.get(0) else {
            info!("empty media list, closing immediately");
            controller.emit(ViewerEvent::Closed {
                reason: CloseReason::Empty,
            })?;
            return Ok(controller);
        };

        let timer = SlideTimer::for_item(first, &controller.playback);
        controller.session = Some(Session {
            navigator: Navigator::new(media.len()),
            media,
            timer,
            state: PlaybackState::at(0),
            tag: SlideTag {
                index: 0,
                generation: 0,
            },
        });
        controller.start_slide(0)?;

        Ok(controller)
    }

    /// Process one input
    pub fn handle(&mut self, event: ControlEvent) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            trace!(?event, "viewer closed, input ignored");
            return Ok(());
        };

        match event {
            ControlEvent::Tick { tag } => {
                if tag != session.tag {
                    debug!(?tag, current = ?session.tag, "discarding stale tick");
                    return Ok(());
                }
                if !session.state.is_playing {
                    return Ok(());
                }

                let outcome = session.timer.on_tick();
                self.after_timer(outcome)
            }

            ControlEvent::PlaybackPosition { tag, current, total } => {
                if tag != session.tag {
                    debug!(?tag, current = ?session.tag, "discarding stale playback position");
                    return Ok(());
                }

                let outcome = session.timer.on_position(current, total);
                self.after_timer(outcome)
            }

            ControlEvent::Tap { x, width } => match self.tap_zones.classify(x, width) {
                Some(intent) => self.navigate(intent),
                None => Ok(()),
            },

            ControlEvent::Next => self.navigate(Intent::Advance),
            ControlEvent::Previous => self.navigate(Intent::Retreat),
            ControlEvent::Close => self.navigate(Intent::Close),

            ControlEvent::Pause => self.set_playing(false),
            ControlEvent::Resume => self.set_playing(true),
            ControlEvent::TogglePause => {
                let playing = session.state.is_playing;
                self.set_playing(!playing)
            }
        }
    }

    /// Current playback state; `None` once closed
    pub fn state(&self) -> Option<&PlaybackState> {
        self.session.as_ref().map(|s| &s.state)
    }

    pub fn media(&self) -> Option<&MediaList> {
        self.session.as_ref().map(|s| &s.media)
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.session
            .as_ref()
            .and_then(|s| s.media.get(s.state.current_index))
    }

    /// Tag that timer ticks and position reports must carry for the current slide
    pub fn current_tag(&self) -> Option<SlideTag> {
        self.session.as_ref().map(|s| s.tag)
    }

    pub fn current_duration(&self) -> Option<SlideDuration> {
        self.session.as_ref().map(|s| s.timer.duration())
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }

    fn after_timer(&mut self, outcome: TimerOutcome) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        match outcome {
            TimerOutcome::Progressed => {
                session.state.progress = session.timer.progress();
                Ok(())
            }
            TimerOutcome::Completed => {
                session.state.progress = 1.0;
                debug!(index = session.state.current_index, "slide complete");
                self.navigate(Intent::Advance)
            }
            TimerOutcome::Ignored => Ok(()),
        }
    }

    fn navigate(&mut self, intent: Intent) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        match session.navigator.apply(intent) {
            Transition::Moved { from, to } => {
                debug!(from, to, ?intent, "slide transition");
                self.start_slide(to)
            }
            Transition::Stayed => {
                trace!(?intent, "navigation had no effect");
                Ok(())
            }
            Transition::Closed(reason) => self.close(reason),
        }
    }

    /// Reset progress, replace the timer and retag the slide.
    ///
    /// Retagging is what cancels the previous slide's timer: anything still in
    /// flight for the old tag is discarded on arrival.
    fn start_slide(&mut self, index: usize) -> Result<()> {
        self.generation += 1;
        let generation = self.generation;
        let playback = self.playback;

        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let Some(item) = session.media.get(index).cloned() else {
            return Ok(());
        };

        session.timer = SlideTimer::for_item(&item, &playback);
        session.tag = SlideTag { index, generation };
        session.state = PlaybackState::at(index);

        let event = ViewerEvent::SlideChanged {
            index,
            count: session.media.len(),
            duration: session.timer.duration(),
            tag: session.tag,
            item,
        };
        self.emit(event)
    }

    fn set_playing(&mut self, playing: bool) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if session.state.is_playing == playing {
            return Ok(());
        }

        session.state.is_playing = playing;
        self.emit(if playing {
            ViewerEvent::Resumed
        } else {
            ViewerEvent::Paused
        })
    }

    fn close(&mut self, reason: CloseReason) -> Result<()> {
        self.session = None;
        info!(?reason, "story closed");
        self.emit(ViewerEvent::Closed { reason })
    }

    fn emit(&self, event: ViewerEvent) -> Result<()> {
        self.events
            .send(event)
            .context("viewer event receiver disconnected")
    }
}
