pub const APP_NAME: &str = "story-reel";

/// File extensions treated as video when no explicit kind tag is given
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "ogg", "avi"];

/// File extensions picked up when building a story from a directory
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "avif"];

/// Extract the lowercase file extension of a media URL or path.
///
/// Any `?query` or `#fragment` suffix is ignored, so
/// `https://cdn.example/clip.MP4?token=abc` yields `mp4`.
///
/// # Returns
/// * `Some(String)` - the extension, lowercased
/// * `None` - the last path segment has no extension
pub fn url_extension(url: &str) -> Option<String> {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    let segment = path.rsplit(['/', '\\']).next().unwrap_or(path);

    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }

    Some(ext.to_lowercase())
}

pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS.contains(&ext)
}

pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(url_extension("clips/Intro.MOV").as_deref(), Some("mov"));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            url_extension("https://cdn.example/a/b/clip.webm?token=x.png").as_deref(),
            Some("webm")
        );
        assert_eq!(url_extension("reel.mp4#t=10").as_deref(), Some("mp4"));
    }

    #[test]
    fn missing_extension_returns_none() {
        assert_eq!(url_extension("https://cdn.example/media/12345"), None);
        assert_eq!(url_extension(""), None);
        assert_eq!(url_extension("trailing."), None);
    }

    #[test]
    fn dot_in_directory_does_not_count() {
        assert_eq!(url_extension("https://cdn.example.com/photo"), None);
    }

    #[test]
    fn dotfile_has_no_extension() {
        assert_eq!(url_extension("/media/.hidden"), None);
    }
}
