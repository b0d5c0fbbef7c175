//! Hopper Player - Game session and windowed host
//!
//! This crate ties input, physics and the background timer into a
//! `GameSession`, and provides the `PlayerApp` winit handler that ticks the
//! session once per display refresh.

pub mod config;
pub mod frame;
pub mod logging;
mod player_app;
pub mod script;
pub mod session;

pub use config::{DisplayConfig, GameConfig};
pub use frame::{FrameSnapshot, ScoreState};
pub use player_app::{run, PlayerApp};
pub use script::{KeyStep, Script, TickRecord};
pub use session::{GameSession, SessionState};
