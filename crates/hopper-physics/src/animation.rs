//! Sprite animation derived from the player state.
//!
//! Nothing here is stored: the tag is recomputed from the continuous physics
//! values every frame, so it can never drift from them.

use crate::player::PlayerState;
use hopper_core::Facing;
use serde::Serialize;
use std::fmt;

/// Body pose shown by the sprite
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Pose {
    Stand,
    Walk,
    Jump,
}

impl Pose {
    pub fn as_str(self) -> &'static str {
        match self {
            Pose::Stand => "Stand",
            Pose::Walk => "Walk",
            Pose::Jump => "Jump",
        }
    }
}

/// Pose plus the direction the sprite is mirrored toward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AnimationTag {
    pub pose: Pose,
    pub facing: Facing,
}

impl AnimationTag {
    /// Uses the same landing predicate as gravity, so the sprite stops
    /// showing `Jump` on the tick the player touches down.
    pub fn from_player(player: &PlayerState) -> Self {
        let pose = if player.is_landing() {
            if player.dx != 0.0 {
                Pose::Walk
            } else {
                Pose::Stand
            }
        } else {
            Pose::Jump
        };
        Self {
            pose,
            facing: player.facing,
        }
    }

    /// Class list the sprite sheet is keyed by, e.g. `"Player Sprite Walk Left"`
    pub fn sprite_class(&self) -> String {
        format!("Player Sprite {}", self)
    }
}

impl fmt::Display for AnimationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pose.as_str(), self.facing)
    }
}
