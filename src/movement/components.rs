//! Movement domain: the player-controlled walker.

use bevy::prelude::*;

use crate::movement::Direction;
use crate::sprites::{AnimationPhase, WalkAnimation};

#[derive(Component, Debug, Clone)]
pub struct Player {
    /// World position; the sprite is drawn centred here.
    pub position: Vec2,
    /// Last non-idle direction. Survives idle ticks.
    pub facing: Direction,
    /// Units per second.
    pub speed: f32,
    pub walk: WalkAnimation,
}

impl Player {
    pub fn new(position: Vec2, speed: f32, walk: WalkAnimation) -> Self {
        Self {
            position,
            facing: Direction::Right,
            speed,
            walk,
        }
    }

    /// Advance one tick of `dt` seconds and return the distance travelled.
    ///
    /// Position is unbounded; the walker may leave the screen.
    pub fn update(&mut self, dt: f32, direction: Option<Direction>) -> f32 {
        if let Some(direction) = direction {
            self.facing = direction;
        }

        let step = direction.map_or(Vec2::ZERO, Direction::unit_vector) * dt * self.speed;
        self.position += step;

        let distance = step.length();
        self.walk.update(distance);
        distance
    }

    pub fn phase(&self) -> AnimationPhase {
        self.walk.phase()
    }

    /// Flattened sheet offset of the frame to draw.
    pub fn frame_offset(&self) -> usize {
        self.facing.sheet_row() * self.walk.cols() + self.walk.frame()
    }
}
