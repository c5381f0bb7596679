use crate::core::models::Story;
use crate::core::traits::StoryStore;
use crate::utils::APP_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Stories read from a JSON array on disk
pub struct JsonStoryStore {
    file_path: PathBuf,
}

impl JsonStoryStore {
    /// Store at the default location, `<config dir>/story-reel/stories.json`
    pub fn new() -> Result<Self> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push(APP_NAME);

        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create {}", path.display()))?;

        path.push("stories.json");
        Ok(Self { file_path: path })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl StoryStore for JsonStoryStore {
    fn load_all(&self) -> Result<Vec<Story>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Could not read {}", self.file_path.display()))?;
        let mut stories: Vec<Story> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid story file {}", self.file_path.display()))?;

        sort_newest_first(&mut stories);
        Ok(stories)
    }
}

/// Newest first by `created_at`; undated stories go last in their original order.
///
/// Timestamps are ISO 8601 strings, so lexical order is chronological.
pub fn sort_newest_first(stories: &mut [Story]) {
    stories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStoryStore::with_path(dir.path().join("nope.json"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn stories_are_sorted_newest_first() {
        let file = write_file(
            r#"[
                {"id":"old","title":"Old","created_at":"2023-01-01T00:00:00Z"},
                {"id":"undated-a","title":"A"},
                {"id":"new","title":"New","created_at":"2024-06-01T00:00:00Z"},
                {"id":"undated-b","title":"B"}
            ]"#,
        );
        let store = JsonStoryStore::with_path(file.path());
        let ids: Vec<String> = store.load_all().unwrap().into_iter().map(|s| s.id).collect();

        assert_eq!(ids, vec!["new", "old", "undated-a", "undated-b"]);
    }

    #[test]
    fn find_by_id() {
        let file = write_file(r#"[{"id":"a","title":"Alpha"},{"id":"b","title":"Beta"}]"#);
        let store = JsonStoryStore::with_path(file.path());

        assert_eq!(store.find("b").unwrap().map(|s| s.title), Some("Beta".to_owned()));
        assert!(store.find("zzz").unwrap().is_none());
    }

    #[test]
    fn malformed_file_reports_path() {
        let file = write_file("{ not json");
        let store = JsonStoryStore::with_path(file.path());

        let err = store.load_all().unwrap_err();
        assert!(format!("{err:#}").contains("Invalid story file"));
    }
}
