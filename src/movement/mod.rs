//! Movement domain: direction resolution, player state and locomotion.

mod components;
mod direction;
mod resources;
mod systems;


pub use components::Player;
pub use direction::{Direction, HeldDirections, resolve_direction};
pub use resources::MovementInput;

use bevy::prelude::*;

use crate::core::{FrameSet, StartupSet};
use crate::movement::systems::{apply_movement, read_input, spawn_player};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player.in_set(StartupSet::Spawn))
            .add_systems(Update, read_input.in_set(FrameSet::Input))
            .add_systems(Update, apply_movement.in_set(FrameSet::Simulate));
    }
}
