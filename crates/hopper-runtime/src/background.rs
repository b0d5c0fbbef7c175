//! Timed background rotation
//!
//! The backdrop steps through four times of day, one step every
//! `period_secs`, wrapping from night back to morning.

use crate::event::GameEvent;
use crate::system::{RuntimeSystem, TickContext};
use hopper_core::{HopperError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the time-of-day backdrops
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPhase {
    #[default]
    Morning,
    Day,
    Evening,
    Night,
}

impl BackgroundPhase {
    pub const ALL: [BackgroundPhase; 4] = [
        BackgroundPhase::Morning,
        BackgroundPhase::Day,
        BackgroundPhase::Evening,
        BackgroundPhase::Night,
    ];

    /// The phase that follows this one
    pub fn next(self) -> Self {
        match self {
            BackgroundPhase::Morning => BackgroundPhase::Day,
            BackgroundPhase::Day => BackgroundPhase::Evening,
            BackgroundPhase::Evening => BackgroundPhase::Night,
            BackgroundPhase::Night => BackgroundPhase::Morning,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundPhase::Morning => "morning",
            BackgroundPhase::Day => "day",
            BackgroundPhase::Evening => "evening",
            BackgroundPhase::Night => "night",
        }
    }
}

impl fmt::Display for BackgroundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[background]` config section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// Seconds each phase stays on screen
    #[serde(default = "default_period")]
    pub period_secs: f64,
}

fn default_period() -> f64 {
    10.0
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            period_secs: default_period(),
        }
    }
}

impl BackgroundConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.period_secs.is_finite() || self.period_secs <= 0.0 {
            return Err(HopperError::InvalidConfig(format!(
                "background.period_secs must be finite and positive, got {}",
                self.period_secs
            )));
        }
        Ok(())
    }
}

/// Steps through the background phases on a wall-time timer
pub struct BackgroundCycle {
    phase: BackgroundPhase,
    elapsed: f64,
    period: f64,
}

impl BackgroundCycle {
    pub fn new(config: &BackgroundConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            phase: BackgroundPhase::default(),
            elapsed: 0.0,
            period: config.period_secs,
        })
    }

    pub fn phase(&self) -> BackgroundPhase {
        self.phase
    }

    /// Advance the timer, returning the new phase if it changed.
    ///
    /// A long frame may cross several periods; only the final phase is
    /// returned.
    pub fn advance(&mut self, seconds: f64) -> Option<BackgroundPhase> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return None;
        }
        self.elapsed += seconds;
        let start = self.phase;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            self.phase = self.phase.next();
        }
        (self.phase != start).then_some(self.phase)
    }
}

impl RuntimeSystem for BackgroundCycle {
    fn initialize(&mut self) -> Result<()> {
        self.phase = BackgroundPhase::default();
        self.elapsed = 0.0;
        Ok(())
    }

    fn fixed_update(&mut self, ctx: &mut TickContext<'_>) -> Result<()> {
        if let Some(phase) = self.advance(ctx.delta_time) {
            ctx.events.push(GameEvent::BackgroundChanged { phase });
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "background"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ControlState, EventBus};

    fn cycle(period: f64) -> BackgroundCycle {
        BackgroundCycle::new(&BackgroundConfig {
            period_secs: period,
        })
        .unwrap()
    }

    #[test]
    fn phases_cycle_in_order_and_wrap() {
        let mut phase = BackgroundPhase::Morning;
        for expected in BackgroundPhase::ALL {
            assert_eq!(phase, expected);
            phase = phase.next();
        }
        assert_eq!(phase, BackgroundPhase::Morning);
    }

    #[test]
    fn advance_changes_phase_once_per_period() {
        let mut bg = cycle(10.0);
        assert_eq!(bg.advance(9.5), None);
        assert_eq!(bg.advance(0.5), Some(BackgroundPhase::Day));
        assert_eq!(bg.advance(5.0), None);
        assert_eq!(bg.phase(), BackgroundPhase::Day);
    }

    #[test]
    fn long_frame_crosses_several_periods() {
        let mut bg = cycle(1.0);
        assert_eq!(bg.advance(3.5), Some(BackgroundPhase::Night));
        assert_eq!(bg.advance(0.5), Some(BackgroundPhase::Morning));
    }

    #[test]
    fn bad_deltas_are_ignored() {
        let mut bg = cycle(1.0);
        assert_eq!(bg.advance(f64::NAN), None);
        assert_eq!(bg.advance(-2.0), None);
        assert_eq!(bg.phase(), BackgroundPhase::Morning);
    }

    #[test]
    fn rejects_non_positive_period() {
        let config = BackgroundConfig { period_secs: 0.0 };
        assert!(BackgroundCycle::new(&config).is_err());
    }

    #[test]
    fn fixed_update_reports_change() {
        let mut bg = cycle(0.5);
        let controls = ControlState::default();
        let mut events = EventBus::new();
        let mut ctx = TickContext {
            controls: &controls,
            events: &mut events,
            delta_time: 0.5,
            frame: 1,
        };
        bg.fixed_update(&mut ctx).unwrap();
        assert_eq!(
            events.drain(),
            vec![GameEvent::BackgroundChanged {
                phase: BackgroundPhase::Day
            }]
        );
    }
}
