//! Runtime system trait

use crate::event_bus::EventBus;
use crate::input::ControlState;
use hopper_core::Result;

/// Everything a system may look at during one tick
pub struct TickContext<'a> {
    /// Control flags as of this tick; systems never modify them
    pub controls: &'a ControlState,
    /// Queue for transitions the system wants to report
    pub events: &'a mut EventBus,
    /// Wall time since the previous tick, in seconds
    pub delta_time: f64,
    /// Tick number, starting at 1
    pub frame: u64,
}

/// A system that can be ticked by the game session
///
/// Systems are ticked in registration order, once per display refresh.
pub trait RuntimeSystem {
    /// Called once when the session starts
    fn initialize(&mut self) -> Result<()>;

    /// Called once per tick
    fn fixed_update(&mut self, ctx: &mut TickContext<'_>) -> Result<()>;

    /// Called when the session is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
