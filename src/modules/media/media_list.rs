use crate::core::models::{MediaItem, MediaKind, MediaList, Story};
use tracing::warn;

/// Resolve a story's media fields into one ordered, non-empty [`MediaList`].
///
/// Priority:
/// 1. `media_urls` when present and non-empty; each item's kind comes from the
///    tag at the same position in `media_types`, else from the URL extension
/// 2. the legacy `cover_image` when it is not blank
/// 3. a single placeholder slide
///
/// Blank entries inside `media_urls` stay in place as placeholder slides.
pub fn build_media_list(story: &Story) -> MediaList {
    if let Some(urls) = story.media_urls.as_deref().filter(|u| !u.is_empty()) {
        let tags = story.media_types.as_deref().unwrap_or_default();
        if !tags.is_empty() && tags.len() != urls.len() {
            warn!(
                story = %story.id,
                urls = urls.len(),
                tags = tags.len(),
                "media_types does not line up with media_urls"
            );
        }

        let items = urls
            .iter()
            .enumerate()
            .map(|(pos, url)| resolve_item(url, tags.get(pos).map(String::as_str)))
            .collect();

        return MediaList::new(items);
    }

    if let Some(cover) = story.cover_image.as_deref().filter(|c| !c.trim().is_empty()) {
        return MediaList::new(vec![MediaItem::inferred(cover.trim())]);
    }

    MediaList::new(vec![MediaItem::placeholder()])
}

fn resolve_item(url: &str, tag: Option<&str>) -> MediaItem {
    let url = url.trim();
    if url.is_empty() {
        return MediaItem::placeholder();
    }

    match tag.and_then(MediaKind::from_tag) {
        Some(kind) => MediaItem::new(url, kind),
        None => MediaItem::inferred(url),
    }
}
