use crate::core::models::Story;
use crate::utils::{is_image_extension, is_video_extension, url_extension};
use anyhow::{Result, bail};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Build an ad-hoc story from the media files under `root`, ordered by path.
///
/// Kinds are left to extension inference. A directory without media still
/// yields a story; it plays as a single placeholder slide.
pub fn scan_directory(root: &Path) -> Result<Story> {
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let media: Vec<String> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_media_file(e.path()))
        .map(|e| e.path().to_string_lossy().into_owned())
        .collect();

    debug!(root = %root.display(), found = media.len(), "scanned directory");

    let name = root
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .to_string();

    Ok(Story {
        id: name.clone(),
        title: name,
        media_urls: Some(media),
        ..Story::default()
    })
}

fn is_media_file(path: &Path) -> bool {
    path.to_str()
        .and_then(url_extension)
        .map(|ext| is_image_extension(&ext) || is_video_extension(&ext))
        .unwrap_or(false)
}
