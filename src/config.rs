//! Screensaver activation configuration.
//!
//! A [`SaverConfig`] selects which layers the screensaver shows and how the
//! photo wallpaper rotates. It is immutable per activation: re-activating the
//! controller replaces the previous configuration wholesale.
//!
//! # Example (YAML)
//!
//! ```yaml
//! clock_enabled: true
//! wallpaper_enabled: true
//! rotation_interval_secs: 600
//! timezone: "Europe/Berlin"
//! ```
//!
//! # Layer precedence
//!
//! At most one of the wallpaper and web layers is visible at a time; the
//! wallpaper wins when both are enabled. The clock overlay is independent and
//! may be shown over either.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;
use crate::DEFAULT_ROTATION_INTERVAL_SECS;

/// Configuration for one screensaver activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SaverConfig {
    /// Show the embedded web page layer
    pub web_enabled: bool,

    /// URL loaded by the web layer; required when `web_enabled` is set
    pub web_url: String,

    /// Show the rotating photo wallpaper layer
    pub wallpaper_enabled: bool,

    /// Show the clock overlay
    pub clock_enabled: bool,

    /// Seconds between wallpaper rotations (minimum 1)
    pub rotation_interval_secs: u64,

    /// IANA timezone the clock is rendered in (host-local when absent)
    pub timezone: Option<String>,
}

impl Default for SaverConfig {
    fn default() -> Self {
        Self {
            web_enabled: false,
            web_url: String::new(),
            wallpaper_enabled: false,
            clock_enabled: true,
            rotation_interval_secs: DEFAULT_ROTATION_INTERVAL_SECS,
            timezone: None,
        }
    }
}

impl SaverConfig {
    /// Create a config with only the clock overlay enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the web layer with the given URL.
    #[must_use]
    pub fn with_web_url(mut self, url: impl Into<String>) -> Self {
        self.web_enabled = true;
        self.web_url = url.into();
        self
    }

    /// Enable the rotating wallpaper layer.
    #[must_use]
    pub fn with_wallpaper(mut self) -> Self {
        self.wallpaper_enabled = true;
        self
    }

    /// Enable or disable the clock overlay.
    #[must_use]
    pub fn with_clock(mut self, enabled: bool) -> Self {
        self.clock_enabled = enabled;
        self
    }

    /// Set the wallpaper rotation interval in seconds.
    #[must_use]
    pub fn with_rotation_interval(mut self, seconds: u64) -> Self {
        self.rotation_interval_secs = seconds;
        self
    }

    /// Render the clock in the given IANA timezone instead of host-local time.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Load a config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Io(format!(
                "failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from the JSON form it arrives in over the wire.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Rejects a rotation interval below 1 second, a web layer without a URL,
    /// and a timezone that is not a known IANA name.
    pub fn validate(&self) -> Result<(), Error> {
        if self.rotation_interval_secs < 1 {
            return Err(Error::RotationInterval {
                got: self.rotation_interval_secs,
            });
        }

        if self.web_enabled && !self.wallpaper_enabled && self.web_url.is_empty() {
            return Err(Error::Config(
                "web layer enabled but web_url is empty".to_string(),
            ));
        }

        if let Some(tz) = &self.timezone {
            if tz.parse::<chrono_tz::Tz>().is_err() {
                return Err(Error::Config(format!("unknown timezone '{tz}'")));
            }
        }

        Ok(())
    }

    /// The configured display timezone, parsed.
    pub(crate) fn display_timezone(&self) -> Option<chrono_tz::Tz> {
        self.timezone.as_deref().and_then(|tz| tz.parse().ok())
    }
}
