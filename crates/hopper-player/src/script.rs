//! Scripted headless runs
//!
//! A script is a TOML key timeline replayed against a fresh session:
//!
//! ```toml
//! viewport_width = 300.0
//! ticks = 120
//!
//! [[keys]]
//! tick = 0
//! key = "ArrowRight"
//!
//! [[keys]]
//! tick = 30
//! key = "ArrowUp"
//!
//! [[keys]]
//! tick = 31
//! key = "ArrowUp"
//! pressed = false
//! ```
//!
//! Key steps at tick `n` are applied just before the `n`th tick (0-based).

use crate::config::GameConfig;
use crate::frame::FrameSnapshot;
use crate::session::GameSession;
use hopper_core::{HopperError, Result};
use hopper_physics::{PlayerState, Viewport};
use hopper_runtime::GameEvent;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use std::path::Path;
use winit::keyboard::KeyCode;

/// One key press or release at a given tick
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyStep {
    pub tick: u64,
    pub key: KeyCode,
    #[serde(default = "default_true")]
    pub pressed: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    /// Play area width in game units
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    /// Number of ticks to run; defaults to one past the last key step
    #[serde(default)]
    pub ticks: Option<u64>,
    #[serde(default)]
    pub spawn_x: f64,
    /// Display refresh rate the run pretends to have, for timers
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    #[serde(default)]
    pub keys: Vec<KeyStep>,
}

fn default_viewport_width() -> f64 {
    300.0
}

fn default_frame_rate() -> f64 {
    60.0
}

/// State after one scripted tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickRecord {
    #[serde(flatten)]
    pub frame: FrameSnapshot,
    pub events: Vec<GameEvent>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let script: Self = toml::from_str(content)?;
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(HopperError::ScriptError(format!(
                "frame_rate must be finite and positive, got {}",
                self.frame_rate
            )));
        }
        if !self.spawn_x.is_finite() {
            return Err(HopperError::ScriptError(format!(
                "spawn_x must be finite, got {}",
                self.spawn_x
            )));
        }
        Ok(())
    }

    /// Ticks the script runs for when no override is given
    pub fn length(&self) -> u64 {
        self.ticks.unwrap_or_else(|| {
            self.keys
                .iter()
                .map(|step| step.tick.saturating_add(1))
                .max()
                .unwrap_or(0)
        })
    }

    /// Replay the timeline and collect every tick
    pub fn run(&self, config: &GameConfig, ticks: Option<u64>) -> Result<Vec<TickRecord>> {
        let mut records = Vec::new();
        self.run_with(config, ticks, |record| {
            records.push(record);
            ControlFlow::Continue(())
        })?;
        Ok(records)
    }

    /// Replay the timeline against a new session built from `config`,
    /// handing each tick to `sink` as soon as it is produced.
    ///
    /// Stops early when `sink` breaks. Returns the number of ticks run.
    pub fn run_with<F>(&self, config: &GameConfig, ticks: Option<u64>, mut sink: F) -> Result<u64>
    where
        F: FnMut(TickRecord) -> ControlFlow<()>,
    {
        let viewport = Viewport::new(self.viewport_width, config.display.player_width)?;
        let mut session =
            GameSession::new(config)?.with_spawn(PlayerState::at(self.spawn_x));
        session.set_viewport(Ok(viewport));
        session.start()?;

        let mut steps = self.keys.clone();
        steps.sort_by_key(|step| step.tick);
        let mut steps = steps.into_iter().peekable();

        let total = ticks.unwrap_or_else(|| self.length());
        let delta_time = 1.0 / self.frame_rate;
        let mut ran = 0;

        while ran < total {
            while let Some(step) = steps.next_if(|step| step.tick == ran) {
                session.key_event(step.key, step.pressed);
            }
            session.tick_with(delta_time);
            ran += 1;

            let record = TickRecord {
                frame: session.frame(),
                events: session.drain_events(),
            };
            if sink(record).is_break() {
                break;
            }
        }

        session.stop();
        tracing::debug!(ticks = ran, "script finished");
        Ok(ran)
    }
}
