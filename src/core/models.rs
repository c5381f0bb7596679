use crate::utils::{is_video_extension, url_extension};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One story ("highlight") record as delivered by the content source.
///
/// Media can arrive in two shapes: the newer `media_urls` list with an optional
/// positional `media_types` list, or the legacy single `cover_image`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub cover_image: Option<String>,
    pub media_urls: Option<Vec<String>>,
    pub media_types: Option<Vec<String>>,
    pub link: Option<String>,
    pub created_at: Option<String>,
}

impl Story {
    pub fn has_link(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.trim().is_empty())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Parse an explicit kind tag.
    ///
    /// Accepts `image` / `video` in any case as well as MIME types such as
    /// `video/mp4`. Anything else is `None` so callers fall back to inference.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        let family = tag.split('/').next().unwrap_or_default();

        match family {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    /// Infer the kind from the URL's file extension; unknown means image.
    pub fn infer(url: &str) -> Self {
        match url_extension(url) {
            Some(ext) if is_video_extension(&ext) => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }

    /// Build an item whose kind is inferred from the URL
    pub fn inferred(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = MediaKind::infer(&url);
        Self { url, kind }
    }

    /// The "no media" slide the surface renders as a title card
    pub fn placeholder() -> Self {
        Self::new(String::new(), MediaKind::Image)
    }

    /// True when there is nothing to load for this slide
    pub fn is_placeholder(&self) -> bool {
        self.url.trim().is_empty()
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            write!(f, "(no media)")
        } else {
            write!(f, "{} [{}]", self.url, self.kind)
        }
    }
}

/// Ordered, read-only media sequence for one opened story.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaList {
    items: Vec<MediaItem>,
}

impl MediaList {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a MediaList {
    type Item = &'a MediaItem;
    type IntoIter = std::slice::Iter<'a, MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// How long a slide stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDuration {
    /// Fixed countdown (images and placeholders)
    Fixed(Duration),
    /// Completion follows the media's playback position; `hint` is advisory only.
    /// `length` is the media's own length, known once the surface reports it.
    PlaybackDriven {
        hint: Duration,
        length: Option<Duration>,
    },
}

impl SlideDuration {
    /// A video slide whose length is not reported yet
    pub fn video(hint: Duration) -> Self {
        SlideDuration::PlaybackDriven { hint, length: None }
    }

    /// Best known length: the media length when reported, else the hint
    pub fn nominal(&self) -> Duration {
        match self {
            SlideDuration::Fixed(d) => *d,
            SlideDuration::PlaybackDriven { hint, length } => length.unwrap_or(*hint),
        }
    }

    /// True when the length shown is the real one rather than the hint
    pub fn is_exact(&self) -> bool {
        match self {
            SlideDuration::Fixed(_) => true,
            SlideDuration::PlaybackDriven { length, .. } => length.is_some(),
        }
    }
}

/// Live playback state of an open viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub current_index: usize,
    /// Progress through the current slide, 0.0 - 1.0
    pub progress: f64,
    pub is_playing: bool,
}

impl PlaybackState {
    pub fn at(index: usize) -> Self {
        Self {
            current_index: index,
            progress: 0.0,
            is_playing: true,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::at(0)
    }
}
