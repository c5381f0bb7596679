use crate::cli_handlers::{CliCommand, load_config, story_store};
use anyhow::{Result, bail};
use std::path::PathBuf;
use story_reel::core::traits::StoryStore;
use story_reel::modules::media::media_list::build_media_list;
use story_reel::modules::ui::terminal::renderer::TerminalRenderer;

pub struct ShowCommand {
    pub stories: Option<PathBuf>,
    pub id: String,
}

impl CliCommand for ShowCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let config = load_config()?;
        let store = story_store(self.stories, &config)?;

        let Some(story) = store.find(&self.id)? else {
            bail!("No story with id '{}'", self.id);
        };

        let media = build_media_list(&story);
        TerminalRenderer::new().print_media_list(&story, &media);

        Ok(())
    }
}
