//! Debug domain: edge-triggered tuning hotkeys for the player.

use bevy::prelude::*;

use crate::core::DemoSettings;
use crate::debug::apply_pressed_tuning;
use crate::movement::Player;

/// Holding a tuning key applies it once; it must be released to apply again.
pub(crate) fn handle_tuning_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<DemoSettings>,
    mut query: Query<&mut Player>,
) {
    for mut player in &mut query {
        for line in apply_pressed_tuning(&keyboard, &mut player, settings.tuning_step) {
            info!("{}", line);
        }
    }
}
