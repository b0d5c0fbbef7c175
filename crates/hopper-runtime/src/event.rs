//! Gameplay events

use crate::background::BackgroundPhase;
use serde::Serialize;

/// A transition reported by a system during a tick
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Left the ground with this vertical speed
    Jumped { dy: f64 },
    /// Spent the in-air boost
    Boosted { dy: f64 },
    /// Touched down after being airborne
    Landed,
    /// Crossed a viewport edge and reappeared on the other side
    Wrapped { from: f64, to: f64 },
    BackgroundChanged { phase: BackgroundPhase },
}
