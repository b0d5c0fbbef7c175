//! Player kinematic state

use hopper_core::Facing;
use serde::{Deserialize, Serialize};

/// Position, velocity and jump bookkeeping for the single player.
///
/// `y` is height above the ground baseline and never goes negative.
/// Presentation receives copies; only the engine mutates the live value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub facing: Facing,
    pub is_boosted: bool,
}

impl PlayerState {
    /// Grounded player standing at `x`
    pub fn at(x: f64) -> Self {
        Self {
            x,
            ..Self::default()
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.y > 0.0
    }

    /// True when this tick's fall would reach the ground.
    ///
    /// Shared by gravity and the animation so the sprite switches on the
    /// same frame the physics lands.
    pub fn is_landing(&self) -> bool {
        self.y <= -self.dy
    }
}
