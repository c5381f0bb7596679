use crate::cli_handlers::{CliCommand, load_config, story_store};
use anyhow::{Result, bail};
use std::path::PathBuf;
use story_reel::application::app::Application;
use story_reel::core::config::AppConfig;
use story_reel::core::events::CloseReason;
use story_reel::core::models::Story;
use story_reel::core::traits::StoryStore;
use story_reel::modules::ui::terminal::renderer::TerminalRenderer;
use tracing::info;

pub struct PlayCommand {
    pub stories: Option<PathBuf>,
    pub id: String,
}

impl CliCommand for PlayCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let config = load_config()?;
        let store = story_store(self.stories, &config)?;

        let Some(story) = store.find(&self.id)? else {
            bail!("No story with id '{}'", self.id);
        };

        play_story(&story, config)
    }
}

/// Open `story` in the terminal viewer and block until it closes
pub(crate) fn play_story(story: &Story, config: AppConfig) -> Result<()> {
    info!(id = %story.id, "opening story");

    let mut app = Application::open(story, config)?
        .with_renderer(Box::new(TerminalRenderer::new()));

    let reason = app.play()?;

    let ui = TerminalRenderer::new();
    match reason {
        CloseReason::Completed => ui.print_message("✓ Story finished"),
        CloseReason::Dismissed => ui.print_message("Story closed"),
        CloseReason::Empty => ui.print_error(&format!("'{}' has no media to show", story.title)),
    }

    Ok(())
}
