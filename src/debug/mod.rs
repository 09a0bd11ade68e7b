//! Debug domain: live tuning of animation interval and walk speed.
//!
//! Keys:
//! - V / C: raise / lower the walk-cycle interval
//! - F / D: raise / lower the walk speed

mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::{TuningAction, apply_pressed_tuning, apply_tuning};

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::debug::systems::handle_tuning_hotkeys;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_tuning_hotkeys.in_set(FrameSet::Tuning));
    }
}
