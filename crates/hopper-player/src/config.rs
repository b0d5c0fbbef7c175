//! Game configuration
//!
//! Loaded from a TOML file with one section per concern. Every field has a
//! default, so a missing file or a partial file is fine:
//!
//! ```toml
//! [physics]
//! gravity = 0.25
//!
//! [input]
//! left = ["ArrowLeft", "KeyA"]
//!
//! [display]
//! scale_factor = 3.0
//!
//! [background]
//! period_secs = 10.0
//! ```

use hopper_core::{HopperError, Result};
use hopper_physics::constants::{GROUND_HEIGHT, PLAYER_WIDTH, SCALE_FACTOR};
use hopper_physics::PhysicsConfig;
use hopper_runtime::{BackgroundConfig, InputConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "hopper.toml";

/// `[display]` section: how game units map onto the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Screen pixels per game unit
    pub scale_factor: f64,
    /// Ground strip height below the player's baseline, in game units
    pub ground_height: f64,
    /// Player sprite width, in game units
    pub player_width: f64,
    /// Initial window size in logical pixels
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale_factor: SCALE_FACTOR,
            ground_height: GROUND_HEIGHT,
            player_width: PLAYER_WIDTH,
            window_width: 960,
            window_height: 540,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("scale_factor", self.scale_factor),
            ("player_width", self.player_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(HopperError::InvalidConfig(format!(
                    "display.{} must be finite and positive, got {}",
                    field, value
                )));
            }
        }
        if !self.ground_height.is_finite() || self.ground_height < 0.0 {
            return Err(HopperError::InvalidConfig(format!(
                "display.ground_height must be finite and non-negative, got {}",
                self.ground_height
            )));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(HopperError::InvalidConfig(
                "display window size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub background: BackgroundConfig,
}

impl GameConfig {
    /// Load config: an explicit path must exist; otherwise `hopper.toml` in
    /// the working directory is used if present, else the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::from_file(local)?
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.physics.validate()?;
        self.input.validate()?;
        self.display.validate()?;
        self.background.validate()?;
        Ok(())
    }
}
