//! Fixed-step player integrator
//!
//! One call to [`PhysicsEngine::step`] runs the sub-steps in this order, each
//! seeing the values written by the ones before it:
//!
//! 1. gravity / landing
//! 2. walk acceleration or friction
//! 3. horizontal wrap, then `x += dx`
//! 4. jump (grounded only)
//! 5. boost (airborne, once per airborne episode)
//! 6. `y += dy`, landing on the floor if that would take `y` below zero

use crate::config::PhysicsConfig;
use crate::player::PlayerState;
use crate::viewport::Viewport;
use hopper_core::{Facing, Result};
use hopper_runtime::{ControlState, EventBus, GameEvent};

/// Owns the player state and advances it one tick at a time
pub struct PhysicsEngine {
    config: PhysicsConfig,
    viewport: Viewport,
    player: PlayerState,
}

impl PhysicsEngine {
    pub fn new(config: PhysicsConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            viewport,
            player: PlayerState::default(),
        })
    }

    /// Replace the starting state
    pub fn with_player(mut self, player: PlayerState) -> Self {
        self.reset(player);
        self
    }

    /// Put the player back into a known state
    pub fn reset(&mut self, player: PlayerState) {
        self.player = player;
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Copy of the current state for presentation
    pub fn snapshot(&self) -> PlayerState {
        self.player
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance one tick, reporting transitions on `events`
    pub fn step(&mut self, controls: &ControlState, events: &mut EventBus) {
        if self.apply_gravity() {
            events.push(GameEvent::Landed);
        }

        self.walk(controls.left, controls.right);

        if let Some((from, to)) = self.wrap_and_advance() {
            events.push(GameEvent::Wrapped { from, to });
        }

        if self.jump(controls.up) {
            events.push(GameEvent::Jumped { dy: self.player.dy });
        }

        if self.boost(controls.boost) {
            events.push(GameEvent::Boosted { dy: self.player.dy });
        }

        if self.integrate() {
            events.push(GameEvent::Landed);
        }
    }

    /// Land if this tick's fall reaches the floor, otherwise accelerate
    /// downward. Returns true when an airborne player touched down.
    pub fn apply_gravity(&mut self) -> bool {
        let p = &mut self.player;
        if p.is_landing() {
            let was_airborne = p.is_airborne();
            p.y = 0.0;
            p.dy = 0.0;
            p.is_boosted = false;
            was_airborne
        } else {
            p.dy -= self.config.gravity;
            false
        }
    }

    /// Apply vertical velocity. The landing check in gravity runs before the
    /// gravity decrement, so a fall can still cross the floor here; that
    /// counts as a landing. Returns true when it happened.
    pub fn integrate(&mut self) -> bool {
        let p = &mut self.player;
        p.y += p.dy;
        if p.y <= 0.0 && p.dy < 0.0 {
            p.y = 0.0;
            p.dy = 0.0;
            p.is_boosted = false;
            true
        } else {
            false
        }
    }

    /// Accelerate toward an exclusively held direction, else apply friction
    pub fn walk(&mut self, left: bool, right: bool) {
        let direction = match (left, right) {
            (true, false) => Some(Facing::Left),
            (false, true) => Some(Facing::Right),
            _ => None,
        };

        match direction {
            Some(facing) => {
                let max = self.config.max_move_speed;
                let p = &mut self.player;
                p.facing = facing;
                // AIR_ACCEL is deliberately not used here
                p.dx = (p.dx + facing.sign() * self.config.ground_accel).clamp(-max, max);
            }
            None => {
                let f = self.friction();
                let p = &mut self.player;
                if p.dx.abs() <= f {
                    p.dx = 0.0;
                } else {
                    p.dx -= f * p.dx.signum();
                }
            }
        }
    }

    fn friction(&self) -> f64 {
        if self.player.is_airborne() {
            self.config.air_friction
        } else {
            self.config.ground_friction
        }
    }

    /// Wrap `x` across the viewport edges, then apply `dx`.
    /// Returns the positions before and after the wrap when one happened.
    pub fn wrap_and_advance(&mut self) -> Option<(f64, f64)> {
        let before = self.player.x;
        let wrapped = self.viewport.wrap(before);
        self.player.x = wrapped + self.player.dx;
        (wrapped != before).then_some((before, wrapped))
    }

    /// Launch from the ground; scales with running speed
    pub fn jump(&mut self, up: bool) -> bool {
        if !up || self.player.is_airborne() {
            return false;
        }
        self.player.dy = self.config.min_jump_speed + self.config.jump_coefficient * self.player.dx.abs();
        true
    }

    /// Spend the single in-air boost for this airborne episode
    pub fn boost(&mut self, boost: bool) -> bool {
        let p = &mut self.player;
        if !boost || !p.is_airborne() || p.is_boosted {
            return false;
        }
        p.dy = self.config.min_jump_speed + self.config.jump_coefficient * p.dx.abs() * 2.0;
        p.is_boosted = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn engine() -> PhysicsEngine {
        PhysicsEngine::new(
            PhysicsConfig::default(),
            Viewport::new(300.0, PLAYER_WIDTH).unwrap(),
        )
        .unwrap()
    }

    fn controls(left: bool, right: bool, up: bool, boost: bool) -> ControlState {
        ControlState {
            left,
            right,
            up,
            boost,
        }
    }

    fn tick(engine: &mut PhysicsEngine, c: ControlState) -> Vec<GameEvent> {
        let mut bus = EventBus::new();
        engine.step(&c, &mut bus);
        bus.drain()
    }

    fn assert_invariants(p: &PlayerState) {
        assert!(p.y >= 0.0, "y below floor: {}", p.y);
        assert!(p.dx.abs() <= MAX_MOVE_SPEED + 1e-12, "dx over cap: {}", p.dx);
        if p.is_boosted {
            assert!(p.is_airborne(), "boosted while grounded");
        }
    }

    #[test]
    fn friction_decays_to_rest_and_stays() {
        let mut e = engine().with_player(PlayerState {
            x: 100.0,
            dx: 1.0,
            ..PlayerState::default()
        });

        let mut previous = e.player().dx.abs();
        for _ in 0..20 {
            tick(&mut e, ControlState::default());
            let current = e.player().dx.abs();
            assert!(current <= previous);
            if current > 0.0 {
                assert!((previous - current - GROUND_FRICTION).abs() < 1e-9);
            }
            previous = current;
        }
        assert_eq!(e.player().dx, 0.0);

        let rest = e.snapshot();
        tick(&mut e, ControlState::default());
        assert_eq!(e.snapshot(), rest);
    }

    #[test]
    fn jump_impulse_scales_with_speed() {
        let mut e = engine().with_player(PlayerState {
            dx: 1.0,
            ..PlayerState::default()
        });
        e.apply_gravity();
        assert!(e.jump(true));
        assert_eq!(e.player().dy, 4.8);
    }

    #[test]
    fn jump_in_full_tick_reports_event() {
        let mut e = engine().with_player(PlayerState::at(50.0));
        let events = tick(&mut e, controls(false, false, true, false));
        assert_eq!(events, vec![GameEvent::Jumped { dy: MIN_JUMP_SPEED }]);
        assert_eq!(e.player().y, MIN_JUMP_SPEED);
        assert!(e.player().is_airborne());
    }

    #[test]
    fn holding_up_in_air_does_nothing() {
        let mut e = engine().with_player(PlayerState::at(50.0));
        tick(&mut e, controls(false, false, true, false));
        let dy_after_jump = e.player().dy;
        let events = tick(&mut e, controls(false, false, true, false));
        assert!(events.is_empty());
        assert!((e.player().dy - (dy_after_jump - GRAVITY)).abs() < 1e-12);
    }

    #[test]
    fn boost_is_single_use_per_airborne_episode() {
        let mut e = engine().with_player(PlayerState::at(50.0));
        tick(&mut e, controls(false, false, true, false));

        let events = tick(&mut e, controls(false, false, false, true));
        assert_eq!(events, vec![GameEvent::Boosted { dy: MIN_JUMP_SPEED }]);
        assert!(e.player().is_boosted);

        let dy_before = e.player().dy;
        let events = tick(&mut e, controls(false, false, false, true));
        assert!(events.is_empty());
        assert!((e.player().dy - (dy_before - GRAVITY)).abs() < 1e-12);
    }

    #[test]
    fn boost_impulse_doubles_speed_term() {
        let mut e = engine().with_player(PlayerState {
            y: 10.0,
            dx: 1.0,
            ..PlayerState::default()
        });
        assert!(e.boost(true));
        assert!((e.player().dy - (4.0 + 0.8 * 1.0 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn boost_unavailable_on_ground_and_on_jump_tick() {
        let mut e = engine().with_player(PlayerState::at(50.0));
        assert!(!e.boost(true));

        let events = tick(&mut e, controls(false, false, true, true));
        assert_eq!(events.len(), 1);
        assert!(!e.player().is_boosted);
    }

    #[test]
    fn landing_rearms_boost() {
        let mut e = engine().with_player(PlayerState::at(50.0));
        tick(&mut e, controls(false, false, true, false));
        tick(&mut e, controls(false, false, false, true));
        assert!(e.player().is_boosted);

        let mut landed = false;
        for _ in 0..200 {
            let events = tick(&mut e, ControlState::default());
            assert_invariants(e.player());
            if events.contains(&GameEvent::Landed) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(e.player().y, 0.0);
        assert_eq!(e.player().dy, 0.0);
        assert!(!e.player().is_boosted);

        tick(&mut e, controls(false, false, true, false));
        let events = tick(&mut e, controls(false, false, false, true));
        assert!(matches!(events.as_slice(), [GameEvent::Boosted { .. }]));
    }

    #[test]
    fn wrap_round_trip() {
        let mut e = engine().with_player(PlayerState::at(301.0));
        let events = tick(&mut e, ControlState::default());
        assert_eq!(e.player().x, -26.0);
        assert_eq!(
            events,
            vec![GameEvent::Wrapped {
                from: 301.0,
                to: -26.0
            }]
        );

        let mut e = engine().with_player(PlayerState::at(-28.0));
        tick(&mut e, ControlState::default());
        assert_eq!(e.player().x, 299.0);
    }

    #[test]
    fn wrap_happens_before_velocity_is_added() {
        let mut e = engine().with_player(PlayerState {
            x: 301.0,
            dx: 2.0,
            ..PlayerState::default()
        });
        e.walk(false, true);
        let moved = e.wrap_and_advance();
        assert_eq!(moved, Some((301.0, -26.0)));
        assert!((e.player().x - (-26.0 + 2.06)).abs() < 1e-12);
    }

    #[test]
    fn speed_never_exceeds_cap() {
        let mut e = engine().with_player(PlayerState::at(0.0));
        for _ in 0..500 {
            tick(&mut e, controls(false, true, false, false));
            assert_invariants(e.player());
        }
        assert_eq!(e.player().dx, MAX_MOVE_SPEED);

        for _ in 0..500 {
            tick(&mut e, controls(true, false, true, true));
            assert_invariants(e.player());
        }
        assert_eq!(e.player().dx, -MAX_MOVE_SPEED);
    }

    #[test]
    fn facing_follows_exclusive_input_only() {
        let mut e = engine();
        assert_eq!(e.player().facing, Facing::Right);

        e.walk(true, false);
        assert_eq!(e.player().facing, Facing::Left);

        e.walk(true, true);
        assert_eq!(e.player().facing, Facing::Left);

        e.walk(false, false);
        assert_eq!(e.player().facing, Facing::Left);

        e.walk(false, true);
        assert_eq!(e.player().facing, Facing::Right);
    }

    #[test]
    fn conflicting_input_applies_friction() {
        let mut e = engine().with_player(PlayerState {
            dx: 1.0,
            ..PlayerState::default()
        });
        e.walk(true, true);
        assert!((e.player().dx - (1.0 - GROUND_FRICTION)).abs() < 1e-12);
    }

    #[test]
    fn air_friction_is_gentler() {
        let mut e = engine().with_player(PlayerState {
            y: 20.0,
            dx: -1.0,
            ..PlayerState::default()
        });
        e.walk(false, false);
        assert!((e.player().dx - (-1.0 + AIR_FRICTION)).abs() < 1e-12);
    }

    #[test]
    fn airborne_walk_uses_ground_accel() {
        let mut e = engine().with_player(PlayerState {
            y: 20.0,
            ..PlayerState::default()
        });
        e.walk(false, true);
        assert_eq!(e.player().dx, GROUND_ACCEL);
    }

    #[test]
    fn gravity_accumulates_only_while_airborne() {
        let mut e = engine().with_player(PlayerState::at(10.0));
        for _ in 0..10 {
            assert!(!e.apply_gravity());
            assert_eq!(e.player().dy, 0.0);
        }

        let mut e = engine().with_player(PlayerState {
            y: 100.0,
            ..PlayerState::default()
        });
        e.apply_gravity();
        e.apply_gravity();
        assert!((e.player().dy + 2.0 * GRAVITY).abs() < 1e-12);
    }

    #[test]
    fn landing_snaps_without_overshoot() {
        let mut e = engine().with_player(PlayerState {
            y: 1.0,
            dy: -3.0,
            is_boosted: true,
            ..PlayerState::default()
        });
        let events = tick(&mut e, ControlState::default());
        assert_eq!(events, vec![GameEvent::Landed]);
        assert_eq!(e.player().y, 0.0);
        assert!(!e.player().is_boosted);
    }

    #[test]
    fn fall_past_floor_lands_at_integration() {
        // Apex just above the floor: gravity's check passes, the fall overshoots
        let mut e = engine().with_player(PlayerState {
            y: 0.1,
            is_boosted: true,
            ..PlayerState::default()
        });
        let events = tick(&mut e, ControlState::default());
        assert_eq!(events, vec![GameEvent::Landed]);
        assert_eq!(e.player().y, 0.0);
        assert_eq!(e.player().dy, 0.0);
        assert!(!e.player().is_boosted);

        // Next tick is an ordinary grounded tick
        assert!(tick(&mut e, ControlState::default()).is_empty());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = PhysicsConfig {
            max_move_speed: -1.0,
            ..PhysicsConfig::default()
        };
        assert!(PhysicsEngine::new(config, Viewport::new(300.0, 27.0).unwrap()).is_err());
    }
}
