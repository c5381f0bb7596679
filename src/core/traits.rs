use crate::application::state::ViewerState;
use crate::core::events::ControlEvent;
use crate::core::models::Story;
use anyhow::Result;

/// Source of story records
pub trait StoryStore: Send {
    /// Load every story, newest first
    fn load_all(&self) -> Result<Vec<Story>>;

    /// Look up one story by id
    fn find(&self, id: &str) -> Result<Option<Story>> {
        Ok(self.load_all()?.into_iter().find(|s| s.id == id))
    }
}

/// Abstraction for the playback surface
pub trait ViewerRenderer: Send {
    /// Initialize the surface (raw mode, mouse capture, etc.)
    fn init(&mut self) -> Result<()>;

    /// Restore whatever `init` changed
    fn cleanup(&mut self) -> Result<()>;

    /// Paint the current viewer snapshot
    fn render(&mut self, state: &ViewerState) -> Result<()>;

    /// Poll for user input (non-blocking)
    /// Returns control events generated from user input
    fn poll_input(&mut self) -> Result<Vec<ControlEvent>>;
}
