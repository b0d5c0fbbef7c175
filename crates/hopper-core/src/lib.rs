//! Hopper Core - Foundational types for the Hopper platformer
//!
//! This crate provides the types every other Hopper crate depends on:
//! - `Facing` - Horizontal direction the player last pressed
//! - `Vec2` - Screen anchor in game units
//! - Error types and Result alias

mod error;
mod types;

pub use error::{HopperError, Result};
pub use types::{Facing, Vec2};
