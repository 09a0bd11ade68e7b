//! Movement domain: per-tick input resource.

use bevy::prelude::*;

use crate::movement::Direction;

/// Direction resolved from the keyboard this tick, `None` when no key is held.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub direction: Option<Direction>,
}
