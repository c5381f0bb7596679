use crate::core::config::AppConfig;
use crate::utils::APP_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes `config.toml`
pub struct TomlConfigBackend {
    file_path: PathBuf,
}

impl TomlConfigBackend {
    /// Backend at `<config dir>/story-reel/config.toml`
    pub fn new() -> Result<Self> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push(APP_NAME);
        path.push("config.toml");
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

    /// Load and validate; a missing file means defaults
    pub fn load(&self) -> Result<AppConfig> {
        if !self.file_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Could not read {}", self.file_path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.file_path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", self.file_path.display()))?;
        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(config).context("Could not serialize config")?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Could not write {}", self.file_path.display()))?;
        Ok(())
    }
}
