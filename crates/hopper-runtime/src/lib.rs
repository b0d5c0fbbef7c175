//! Hopper Runtime - Game loop infrastructure
//!
//! Provides the building blocks the session ticks once per display refresh:
//! - `InputTracker`: key events folded into level-triggered control flags
//! - `FrameClock`: elapsed wall time for timers (physics never reads it)
//! - `GameEvent` / `EventBus`: typed event queue for gameplay transitions
//! - `RuntimeSystem`: trait for systems ticked by the session
//! - `BackgroundCycle`: timed rotation through the time-of-day backdrops

mod background;
mod clock;
mod event;
mod event_bus;
mod input;
mod system;

pub use background::{BackgroundConfig, BackgroundCycle, BackgroundPhase};
pub use clock::FrameClock;
pub use event::GameEvent;
pub use event_bus::EventBus;
pub use input::{Control, ControlState, InputConfig, InputTracker};
pub use system::{RuntimeSystem, TickContext};
