//! Game session, the aggregate a host ticks
//!
//! Owns the input tracker, the physics and background systems, the HUD
//! state and the event bus. Key events only touch the tracker; `tick` is the
//! only thing that moves the player. A host on several threads must funnel
//! both through one owner, which `&mut self` on every mutator enforces.

use crate::config::GameConfig;
use crate::frame::{FrameSnapshot, ScoreState};
use hopper_core::{HopperError, Result};
use hopper_physics::{PhysicsEngine, PhysicsSystem, PlayerState, Viewport};
use hopper_runtime::{
    BackgroundCycle, EventBus, FrameClock, GameEvent, InputTracker, RuntimeSystem, TickContext,
};
use winit::keyboard::KeyCode;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Built but not started; ticks are ignored
    Ready,
    Running,
    /// Torn down; ticks are ignored and it cannot be restarted
    Stopped,
}

pub struct GameSession {
    state: SessionState,
    clock: FrameClock,
    input: InputTracker,
    physics: PhysicsSystem,
    background: BackgroundCycle,
    score: ScoreState,
    events: EventBus,
    scale_factor: f64,
    ground_height: f64,
    player_width: f64,
}

impl GameSession {
    /// Build a session sized to the configured window, player at the left edge
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let display = &config.display;
        let viewport = Viewport::from_window(
            display.window_width as f64,
            display.scale_factor,
            display.player_width,
        )?;
        let engine = PhysicsEngine::new(config.physics.clone(), viewport)?;

        Ok(Self {
            state: SessionState::Ready,
            clock: FrameClock::new(),
            input: InputTracker::from_config(&config.input),
            physics: PhysicsSystem::new(engine),
            background: BackgroundCycle::new(&config.background)?,
            score: ScoreState::default(),
            events: EventBus::new(),
            scale_factor: display.scale_factor,
            ground_height: display.ground_height,
            player_width: display.player_width,
        })
    }

    /// Choose where the player spawns when the session starts
    pub fn with_spawn(mut self, player: PlayerState) -> Self {
        self.physics.set_spawn(player);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Initialize systems and begin accepting ticks
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            SessionState::Running => return Ok(()),
            SessionState::Stopped => return Err(HopperError::SessionStopped),
            SessionState::Ready => {}
        }
        self.physics.initialize()?;
        self.background.initialize()?;
        self.state = SessionState::Running;
        tracing::info!("session started");
        Ok(())
    }

    /// Tear down. Every later tick is a no-op.
    pub fn stop(&mut self) {
        if self.state == SessionState::Stopped {
            return;
        }
        let systems: [&mut dyn RuntimeSystem; 2] = [&mut self.physics, &mut self.background];
        for system in systems {
            if let Err(e) = system.shutdown() {
                tracing::error!(system = system.name(), error = %e, "shutdown failed");
            }
        }
        self.state = SessionState::Stopped;
        self.input.clear();
        tracing::info!(frames = self.clock.frame, "session stopped");
    }

    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }

    /// Forward a raw key event to the input tracker
    pub fn key_event(&mut self, key: KeyCode, pressed: bool) {
        self.input.process_key(key, pressed);
    }

    /// New window width in logical pixels
    pub fn resize_window(&mut self, width_px: f64) {
        self.set_viewport(Viewport::from_window(
            width_px,
            self.scale_factor,
            self.player_width,
        ));
    }

    /// New viewport measurement; rejected measurements keep the previous one
    pub fn set_viewport(&mut self, viewport: Result<Viewport>) {
        self.physics.resize(viewport);
    }

    pub fn viewport(&self) -> Viewport {
        self.physics.engine.viewport()
    }

    /// Advance one frame using wall time for the timers
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.clock.tick();
        self.run_systems();
    }

    /// Advance one frame with a fixed wall-time delta (headless hosts)
    pub fn tick_with(&mut self, delta_time: f64) {
        if !self.is_running() {
            return;
        }
        self.clock.advance(delta_time);
        self.run_systems();
    }

    fn run_systems(&mut self) {
        let controls = *self.input.controls();
        let mut ctx = TickContext {
            controls: &controls,
            events: &mut self.events,
            delta_time: self.clock.delta_time,
            frame: self.clock.frame,
        };
        let systems: [&mut dyn RuntimeSystem; 2] = [&mut self.physics, &mut self.background];
        for system in systems {
            if let Err(e) = system.fixed_update(&mut ctx) {
                tracing::error!(system = system.name(), error = %e, "tick failed");
            }
        }
    }

    pub fn player(&self) -> PlayerState {
        self.physics.snapshot()
    }

    /// Snapshot of the current frame for presentation
    pub fn frame(&self) -> FrameSnapshot {
        FrameSnapshot::new(
            self.clock.frame,
            self.physics.snapshot(),
            self.ground_height,
            self.background.phase(),
            self.score.clone(),
        )
    }

    /// Events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}
