//! Movement domain: facing directions and key resolution.

use bevy::prelude::*;

/// A facing/movement direction. Each one owns a row band of the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Unit step in world space (y up).
    pub fn unit_vector(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Up => Vec2::new(0.0, 1.0),
        }
    }

    /// Sheet row holding this direction's frames, counted from the bottom.
    pub fn sheet_row(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }
}

/// Directional keys held during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
}

impl HeldDirections {
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            left: keyboard.pressed(KeyCode::ArrowLeft),
            right: keyboard.pressed(KeyCode::ArrowRight),
            down: keyboard.pressed(KeyCode::ArrowDown),
            up: keyboard.pressed(KeyCode::ArrowUp),
        }
    }
}

/// Collapse held keys into one direction.
///
/// Keys are checked Left, Right, Down, Up and the last held one wins, so Up
/// beats everything and Right beats Left. Nothing held resolves to `None`.
pub fn resolve_direction(held: HeldDirections) -> Option<Direction> {
    let mut direction = None;
    if held.left {
        direction = Some(Direction::Left);
    }
    if held.right {
        direction = Some(Direction::Right);
    }
    if held.down {
        direction = Some(Direction::Down);
    }
    if held.up {
        direction = Some(Direction::Up);
    }
    direction
}
