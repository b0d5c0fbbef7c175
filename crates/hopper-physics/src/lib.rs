//! Hopper Physics - Player kinematics
//!
//! Provides the single-player movement model:
//! - `PhysicsEngine`: fixed-step gravity, walk/friction, wrap, jump and boost
//! - `PlayerState`: position, velocity, facing and boost bookkeeping
//! - `Viewport`: validated play area and wrap arithmetic
//! - `AnimationTag`: sprite pose derived from the player state
//! - `PhysicsSystem`: implements `RuntimeSystem` for the game session

pub mod animation;
pub mod config;
pub mod constants;
pub mod engine;
pub mod player;
pub mod viewport;

pub use animation::{AnimationTag, Pose};
pub use config::PhysicsConfig;
pub use engine::PhysicsEngine;
pub use player::PlayerState;
pub use viewport::Viewport;

use hopper_core::Result;
use hopper_runtime::{RuntimeSystem, TickContext};

/// Physics system implementing RuntimeSystem for the game session
pub struct PhysicsSystem {
    pub engine: PhysicsEngine,
    start: PlayerState,
}

impl PhysicsSystem {
    pub fn new(engine: PhysicsEngine) -> Self {
        let start = engine.snapshot();
        Self { engine, start }
    }

    pub fn snapshot(&self) -> PlayerState {
        self.engine.snapshot()
    }

    /// Where `initialize` puts the player; also moves the player there now
    pub fn set_spawn(&mut self, player: PlayerState) {
        self.start = player;
        self.engine.reset(player);
    }

    /// Apply a new viewport measurement. Bad measurements keep the old one.
    pub fn resize(&mut self, viewport: Result<Viewport>) {
        match viewport {
            Ok(vp) => {
                tracing::debug!(width = vp.width(), player_width = vp.player_width(), "viewport resized");
                self.engine.set_viewport(vp);
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring viewport measurement");
            }
        }
    }
}

impl RuntimeSystem for PhysicsSystem {
    fn initialize(&mut self) -> Result<()> {
        self.engine.reset(self.start);
        tracing::info!(x = self.start.x, "player spawned");
        Ok(())
    }

    fn fixed_update(&mut self, ctx: &mut TickContext<'_>) -> Result<()> {
        self.engine.step(ctx.controls, ctx.events);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        let p = self.engine.player();
        tracing::info!(x = p.x, y = p.y, "physics stopped");
        Ok(())
    }

    fn name(&self) -> &str {
        "physics"
    }
}
