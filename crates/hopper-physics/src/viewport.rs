//! Horizontal play area and wrap arithmetic

use hopper_core::{HopperError, Result};
use serde::Serialize;

/// Visible play area width and the player sprite width, in game units.
///
/// Both are finite and strictly positive; construction rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    width: f64,
    player_width: f64,
}

impl Viewport {
    pub fn new(width: f64, player_width: f64) -> Result<Self> {
        check("width", width)?;
        check("player_width", player_width)?;
        Ok(Self {
            width,
            player_width,
        })
    }

    /// Build from a window measured in screen pixels
    pub fn from_window(window_px: f64, scale_factor: f64, player_width: f64) -> Result<Self> {
        check("scale_factor", scale_factor)?;
        check("window width", window_px)?;
        Self::new(window_px / scale_factor, player_width)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn player_width(&self) -> f64 {
        self.player_width
    }

    /// Length of the ring the horizontal coordinate lives on
    pub fn circumference(&self) -> f64 {
        self.width + self.player_width
    }

    /// Move `x` to the opposite edge if it has left the play area.
    ///
    /// Applies at most one circumference, matching one tick's worth of travel.
    pub fn wrap(&self, x: f64) -> f64 {
        if x > self.width {
            x - self.circumference()
        } else if x < -self.player_width {
            x + self.circumference()
        } else {
            x
        }
    }
}

fn check(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HopperError::InvalidViewport { field, value })
    }
}
