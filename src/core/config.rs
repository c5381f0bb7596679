use crate::modules::playback::navigation::TapZones;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// User configuration, stored as TOML
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file holding the story records; defaults to the config directory
    pub stories_path: Option<PathBuf>,
    pub playback: PlaybackConfig,
    pub tap_zones: TapZones,
    pub terminal: TerminalConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Display time of image and placeholder slides
    pub image_duration_ms: u64,
    /// Interval between fixed-timer ticks
    pub tick_interval_ms: u64,
    /// Advisory length handed to the surface for video slides
    pub video_duration_hint_ms: u64,
    /// Sampled video progress at which the slide counts as complete
    pub video_completion_threshold: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            image_duration_ms: 5000,
            tick_interval_ms: 100,
            video_duration_hint_ms: 15000,
            video_completion_threshold: 0.99,
        }
    }
}

impl PlaybackConfig {
    pub fn image_duration(&self) -> Duration {
        Duration::from_millis(self.image_duration_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn video_duration_hint(&self) -> Duration {
        Duration::from_millis(self.video_duration_hint_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TerminalConfig {
    /// How often the terminal surface reports simulated video position
    pub video_report_interval_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            video_report_interval_ms: 250,
        }
    }
}

impl TerminalConfig {
    pub fn video_report_interval(&self) -> Duration {
        Duration::from_millis(self.video_report_interval_ms)
    }
}

impl AppConfig {
    /// Reject values the controller cannot run with
    pub fn validate(&self) -> Result<()> {
        let p = &self.playback;

        if p.image_duration_ms == 0 {
            bail!("playback.image_duration_ms must be greater than zero");
        }
        if p.tick_interval_ms == 0 {
            bail!("playback.tick_interval_ms must be greater than zero");
        }
        if p.video_duration_hint_ms == 0 {
            bail!("playback.video_duration_hint_ms must be greater than zero");
        }
        if !(p.video_completion_threshold > 0.0 && p.video_completion_threshold <= 1.0) {
            bail!(
                "playback.video_completion_threshold must be in (0, 1], got {}",
                p.video_completion_threshold
            );
        }

        let z = &self.tap_zones;
        if !(z.back >= 0.0 && z.forward >= 0.0) {
            bail!("tap_zones.back and tap_zones.forward must not be negative");
        }
        if z.back + z.forward > 1.0 {
            bail!(
                "tap_zones.back + tap_zones.forward must not exceed 1.0, got {}",
                z.back + z.forward
            );
        }

        if self.terminal.video_report_interval_ms == 0 {
            bail!("terminal.video_report_interval_ms must be greater than zero");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [playback]
            image_duration_ms = 3000
            "#,
        )
        .unwrap();

        assert_eq!(config.playback.image_duration_ms, 3000);
        assert_eq!(config.playback.tick_interval_ms, 100);
        assert_eq!(config.tap_zones, TapZones::default());
        assert!(config.stories_path.is_none());
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let mut config = AppConfig::default();
        config.playback.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let mut config = AppConfig::default();
        config.playback.video_completion_threshold = 1.5;
        assert!(config.validate().is_err());

        config.playback.video_completion_threshold = 0.0;
        assert!(config.validate().is_err());

        config.playback.video_completion_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn overlapping_tap_zones_are_rejected() {
        let mut config = AppConfig::default();
        config.tap_zones = TapZones {
            back: 0.6,
            forward: 0.5,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_tap_zone_is_rejected() {
        let mut config = AppConfig::default();
        config.tap_zones.back = -0.1;
        assert!(config.validate().is_err());
    }
}
