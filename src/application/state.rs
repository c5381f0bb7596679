use crate::core::events::{CloseReason, ViewerEvent};
use crate::core::models::{MediaItem, PlaybackState, SlideDuration, Story};

/// Everything the surface needs to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub title: String,
    pub link: Option<String>,
    pub slide_count: usize,
    pub current: Option<MediaItem>,
    pub duration: Option<SlideDuration>,
    pub playback: PlaybackState,
    pub status_message: String,
    pub closed: Option<CloseReason>,
}

impl ViewerState {
    pub fn for_story(story: &Story) -> Self {
        Self {
            title: story.title.clone(),
            link: story.link.clone().filter(|_| story.has_link()),
            slide_count: 0,
            current: None,
            duration: None,
            playback: PlaybackState::default(),
            status_message: String::new(),
            closed: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_some()
    }

    /// Update state based on a controller notification
    pub fn apply_event(&mut self, event: &ViewerEvent) {
        match event {
            ViewerEvent::SlideChanged {
                index,
                count,
                item,
                duration,
                ..
            } => {
                self.slide_count = *count;
                self.current = Some(item.clone());
                self.duration = Some(*duration);
                self.playback = PlaybackState::at(*index);
                self.status_message = if item.is_placeholder() {
                    "No media".to_string()
                } else {
                    format!("Showing {}", item.kind)
                };
            }
            ViewerEvent::Paused => {
                self.playback.is_playing = false;
                self.status_message = "Paused".to_string();
            }
            ViewerEvent::Resumed => {
                self.playback.is_playing = true;
                self.status_message = "Playing".to_string();
            }
            ViewerEvent::Closed { reason } => {
                self.closed = Some(*reason);
                self.current = None;
                self.status_message = match reason {
                    CloseReason::Completed => "Story finished",
                    CloseReason::Dismissed => "Story closed",
                    CloseReason::Empty => "Nothing to show",
                }
                .to_string();
            }
        }
    }

    /// Copy the controller's live progress and best known duration into the snapshot
    pub fn sync_playback(&mut self, playback: Option<&PlaybackState>, duration: Option<SlideDuration>) {
        if let Some(playback) = playback {
            self.playback = *playback;
        }
        if duration.is_some() {
            self.duration = duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::SlideTag;
    use crate::core::models::MediaKind;
    use std::time::Duration;

    fn slide(index: usize, item: MediaItem) -> ViewerEvent {
        ViewerEvent::SlideChanged {
            index,
            count: 3,
            item,
            duration: SlideDuration::Fixed(Duration::from_secs(5)),
            tag: SlideTag { index, generation: 1 },
        }
    }

    #[test]
    fn blank_link_is_dropped() {
        let story = Story {
            title: "T".to_owned(),
            link: Some("  ".to_owned()),
            ..Story::default()
        };
        assert_eq!(ViewerState::for_story(&story).link, None);
    }

    #[test]
    fn slide_change_resets_progress() {
        let mut state = ViewerState::for_story(&Story::default());
        state.playback.progress = 0.7;

        state.apply_event(&slide(2, MediaItem::new("c.mov", MediaKind::Video)));

        assert_eq!(state.playback, PlaybackState::at(2));
        assert_eq!(state.slide_count, 3);
        assert_eq!(state.status_message, "Showing video");
    }

    #[test]
    fn placeholder_slide_reports_no_media() {
        let mut state = ViewerState::for_story(&Story::default());
        state.apply_event(&slide(0, MediaItem::placeholder()));
        assert_eq!(state.status_message, "No media");
    }

    #[test]
    fn pause_and_resume_toggle_playing() {
        let mut state = ViewerState::for_story(&Story::default());
        state.apply_event(&ViewerEvent::Paused);
        assert!(!state.playback.is_playing);
        state.apply_event(&ViewerEvent::Resumed);
        assert!(state.playback.is_playing);
    }

    #[test]
    fn close_clears_current_slide() {
        let mut state = ViewerState::for_story(&Story::default());
        state.apply_event(&slide(0, MediaItem::inferred("a.jpg")));
        state.apply_event(&ViewerEvent::Closed { reason: CloseReason::Completed });

        assert!(state.is_closed());
        assert!(state.current.is_none());
        assert_eq!(state.status_message, "Story finished");
    }

    #[test]
    fn sync_ignores_closed_controller() {
        let mut state = ViewerState::for_story(&Story::default());
        state.playback.progress = 0.4;
        state.sync_playback(None, None);
        assert_eq!(state.playback.progress, 0.4);
    }

    #[test]
    fn sync_picks_up_reported_video_length() {
        let mut state = ViewerState::for_story(&Story::default());
        state.apply_event(&slide(0, MediaItem::inferred("a.mp4")));

        let length = SlideDuration::PlaybackDriven {
            hint: Duration::from_secs(15),
            length: Some(Duration::from_secs(40)),
        };
        state.sync_playback(Some(&PlaybackState::at(0)), Some(length));
        assert_eq!(state.duration.map(|d| d.nominal()), Some(Duration::from_secs(40)));
    }
}
