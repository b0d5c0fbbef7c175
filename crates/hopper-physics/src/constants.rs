//! Tuning constants shared by physics and presentation.
//!
//! Speeds are in game units per tick, accelerations in units per tick².

pub const MAX_MOVE_SPEED: f64 = 2.5;
pub const GROUND_ACCEL: f64 = 0.06;
pub const GROUND_FRICTION: f64 = 0.1;
/// Defined for tuning files but not read by the walk step
pub const AIR_ACCEL: f64 = 0.04;
pub const AIR_FRICTION: f64 = 0.02;
pub const GRAVITY: f64 = 0.25;
pub const MIN_JUMP_SPEED: f64 = 4.0;
pub const JUMP_COEFFICIENT: f64 = 0.8;

/// Height of the ground strip below the player's baseline, in game units
pub const GROUND_HEIGHT: f64 = 40.0;
/// Screen pixels per game unit
pub const SCALE_FACTOR: f64 = 3.0;
/// Width of the player sprite, in game units
pub const PLAYER_WIDTH: f64 = 27.0;
