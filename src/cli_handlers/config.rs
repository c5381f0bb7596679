use crate::cli_handlers::CliCommand;
use anyhow::{Context, Result};
use story_reel::modules::storage::config_backend::TomlConfigBackend;
use story_reel::modules::ui::terminal::renderer::TerminalRenderer;

pub struct ConfigCommand {
    pub init: bool,
}

impl CliCommand for ConfigCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let backend = TomlConfigBackend::new()?;
        let config = backend.load()?;
        let ui = TerminalRenderer::new();

        if self.init {
            if backend.path().exists() {
                ui.print_message(&format!("Config already exists at {}", backend.path().display()));
            } else {
                backend.save(&config)?;
                ui.print_message(&format!("Wrote {}", backend.path().display()));
            }
        }

        let rendered = toml::to_string_pretty(&config).context("Could not render config")?;
        ui.print_message(&format!("# {}", backend.path().display()));
        ui.print_message(rendered.trim_end());

        Ok(())
    }
}
