//! Movement domain: player spawn and per-tick locomotion.

use bevy::prelude::*;

use crate::core::DemoSettings;
use crate::movement::{MovementInput, Player};
use crate::sprites::{SpriteSheet, WalkAnimation};

pub(crate) fn spawn_player(
    mut commands: Commands,
    settings: Res<DemoSettings>,
    sheet: Res<SpriteSheet>,
) {
    let center = settings.window_center();
    let player = Player::new(
        center,
        settings.speed,
        WalkAnimation::new(settings.anim_interval, sheet.layout.cols),
    );

    info!(
        "Spawning player: pos={:?}, speed={}, anim_interval={}",
        center, player.speed, player.walk.interval
    );

    commands.spawn((
        Sprite {
            image: sheet.image.clone(),
            rect: Some(sheet.image_rect(player.frame_offset())),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        player,
    ));
}

pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<&mut Player>,
) {
    let dt = time.delta_secs();

    for mut player in &mut query {
        let before = player.phase();
        player.update(dt, input.direction);

        let after = player.phase();
        if before != after {
            debug!(
                "Player {:?} -> {:?}, carried distance {}",
                before,
                after,
                player.walk.step()
            );
        }
    }
}
