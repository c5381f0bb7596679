use crate::cli_handlers::{CliCommand, load_config, story_store};
use anyhow::Result;
use std::path::PathBuf;
use story_reel::core::traits::StoryStore;
use story_reel::modules::library::search_engine::SearchEngine;
use story_reel::modules::ui::terminal::renderer::TerminalRenderer;

pub struct SearchCommand {
    pub stories: Option<PathBuf>,
    pub query: String,
}

impl CliCommand for SearchCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let config = load_config()?;
        let stories = story_store(self.stories, &config)?.load_all()?;
        let ui = TerminalRenderer::new();

        let results: Vec<_> = SearchEngine::new()
            .search(&stories, &self.query)
            .into_iter()
            .map(|result| (result.index, result.story.clone()))
            .collect();

        ui.print_search_results(&self.query, &results);

        Ok(())
    }
}
