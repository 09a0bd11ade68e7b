//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{HeldDirections, MovementInput, resolve_direction};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.direction = resolve_direction(HeldDirections::from_keyboard(&keyboard));
}
