mod config;
mod list;
mod play;
mod play_dir;
mod search;
mod show;

pub use config::ConfigCommand;
pub use list::ListCommand;
pub use play::PlayCommand;
pub use play_dir::PlayDirCommand;
pub use search::SearchCommand;
pub use show::ShowCommand;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use std::path::PathBuf;
use story_reel::core::config::AppConfig;
use story_reel::modules::storage::config_backend::TomlConfigBackend;
use story_reel::modules::storage::json_backend::JsonStoryStore;

/// Every CLI command implements this trait.
///
/// Commands own their arguments and are consumed on execution; they run exactly once.
pub trait CliCommand {
    fn execute(self: Box<Self>) -> Result<()>;
}

/// Converts parsed arguments into a boxed [`CliCommand`] ready to execute.
pub fn from_cli(cli: Cli) -> Box<dyn CliCommand> {
    let stories = cli.stories;
    match cli.command {
        Commands::List => Box::new(ListCommand { stories }),
        Commands::Show { id } => Box::new(ShowCommand { stories, id }),
        Commands::Search { query } => Box::new(SearchCommand { stories, query }),
        Commands::Play { id } => Box::new(PlayCommand { stories, id }),
        Commands::PlayDir { directory } => Box::new(PlayDirCommand { directory }),
        Commands::Config { init } => Box::new(ConfigCommand { init }),
    }
}

pub(crate) fn load_config() -> Result<AppConfig> {
    TomlConfigBackend::new()?.load()
}

/// `--stories` wins over the configured path, which wins over the default location
pub(crate) fn story_store(
    override_path: Option<PathBuf>,
    config: &AppConfig,
) -> Result<JsonStoryStore> {
    match override_path.or_else(|| config.stories_path.clone()) {
        Some(path) => Ok(JsonStoryStore::with_path(path)),
        None => JsonStoryStore::new(),
    }
}
