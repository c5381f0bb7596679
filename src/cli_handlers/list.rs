use crate::cli_handlers::{CliCommand, load_config, story_store};
use anyhow::Result;
use std::path::PathBuf;
use story_reel::core::traits::StoryStore;
use story_reel::modules::ui::terminal::renderer::TerminalRenderer;

pub struct ListCommand {
    pub stories: Option<PathBuf>,
}

impl CliCommand for ListCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let config = load_config()?;
        let store = story_store(self.stories, &config)?;
        let stories = store.load_all()?;
        let ui = TerminalRenderer::new();

        if stories.is_empty() {
            ui.print_error(&format!("No stories in {}", store.path().display()));
            return Ok(());
        }

        ui.print_story_list(&stories);

        Ok(())
    }
}
