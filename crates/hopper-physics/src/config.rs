//! `[physics]` config section

use crate::constants::*;
use hopper_core::{HopperError, Result};
use serde::{Deserialize, Serialize};

/// Movement tunables. Every field defaults to the stock constant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub max_move_speed: f64,
    pub ground_accel: f64,
    pub ground_friction: f64,
    pub air_accel: f64,
    pub air_friction: f64,
    pub gravity: f64,
    pub min_jump_speed: f64,
    pub jump_coefficient: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_move_speed: MAX_MOVE_SPEED,
            ground_accel: GROUND_ACCEL,
            ground_friction: GROUND_FRICTION,
            air_accel: AIR_ACCEL,
            air_friction: AIR_FRICTION,
            gravity: GRAVITY,
            min_jump_speed: MIN_JUMP_SPEED,
            jump_coefficient: JUMP_COEFFICIENT,
        }
    }
}

impl PhysicsConfig {
    /// Check every tunable is finite and in a range the integrator can use
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("max_move_speed", self.max_move_speed),
            ("ground_accel", self.ground_accel),
            ("gravity", self.gravity),
        ];
        let non_negative = [
            ("ground_friction", self.ground_friction),
            ("air_accel", self.air_accel),
            ("air_friction", self.air_friction),
            ("min_jump_speed", self.min_jump_speed),
            ("jump_coefficient", self.jump_coefficient),
        ];

        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HopperError::InvalidConfig(format!(
                    "physics.{} must be finite and positive, got {}",
                    field, value
                )));
            }
        }
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(HopperError::InvalidConfig(format!(
                    "physics.{} must be finite and non-negative, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}
