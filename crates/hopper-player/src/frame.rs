//! Per-frame snapshot handed to presentation

use hopper_core::Vec2;
use hopper_physics::{AnimationTag, PlayerState};
use hopper_runtime::BackgroundPhase;
use serde::Serialize;
use std::fmt;

/// Lives and score shown in the HUD. Gameplay never touches these yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreState {
    pub player_name: String,
    pub lives: u32,
    pub score: u64,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            player_name: "Mario".to_string(),
            lives: 3,
            score: 0,
        }
    }
}

impl fmt::Display for ScoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  Lives {}  Score {}",
            self.player_name, self.lives, self.score
        )
    }
}

/// Everything presentation needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub player: PlayerState,
    pub animation: AnimationTag,
    /// Sprite anchor in game units: `x` from the left edge, `y` from the
    /// bottom of the window
    pub screen: Vec2,
    pub background: BackgroundPhase,
    pub hud: ScoreState,
}

impl FrameSnapshot {
    pub fn new(
        frame: u64,
        player: PlayerState,
        ground_height: f64,
        background: BackgroundPhase,
        hud: ScoreState,
    ) -> Self {
        Self {
            frame,
            player,
            animation: AnimationTag::from_player(&player),
            screen: Vec2::new(player.x, player.y + ground_height),
            background,
            hud,
        }
    }

    /// Sprite anchor in window pixels
    pub fn pixel_position(&self, scale_factor: f64) -> Vec2 {
        self.screen * scale_factor
    }

    /// Single-line status used for the window title and text output
    pub fn status_line(&self) -> String {
        format!(
            "{}  |  {}  |  x {:.1}  y {:.1}  |  {}",
            self.hud, self.animation, self.player.x, self.player.y, self.background
        )
    }
}
