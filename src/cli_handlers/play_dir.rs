use crate::cli_handlers::play::play_story;
use crate::cli_handlers::{CliCommand, load_config};
use anyhow::Result;
use std::path::PathBuf;
use story_reel::modules::library::scanner::scan_directory;

pub struct PlayDirCommand {
    pub directory: PathBuf,
}

impl CliCommand for PlayDirCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let config = load_config()?;
        let story = scan_directory(&self.directory)?;
        play_story(&story, config)
    }
}
