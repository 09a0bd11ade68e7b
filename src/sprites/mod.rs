//! Sprites module for sprite sheet loading and walk-cycle frame selection.
//!
//! This module handles:
//! - Decoding the sheet image once at startup
//! - Frame rectangle lookup by flattened offset
//! - The distance-driven walk cycle
//! - Pushing the player's current frame into its `Sprite`

pub mod animation;
pub mod sheet;


use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;

pub use animation::*;
pub use sheet::*;

use crate::core::{DemoSettings, FrameSet, StartupSet};
use crate::movement::Player;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sprite_sheet.in_set(StartupSet::LoadSheet))
            .add_systems(Update, sync_player_sprite.in_set(FrameSet::Present));
    }
}

/// Decode the sheet and register it as an image asset.
///
/// Any failure aborts startup; there is no fallback sheet.
pub(crate) fn load_sprite_sheet(
    mut commands: Commands,
    settings: Res<DemoSettings>,
    mut images: ResMut<Assets<Image>>,
) -> Result {
    let decoded = load_sheet_image(&settings.sheet_path)?;
    let layout = SheetLayout::new(
        decoded.width(),
        decoded.height(),
        settings.sheet_cols,
        settings.sheet_rows,
    )?;

    info!(
        "Loaded sprite sheet {}: {}x{} px, {}x{} frames",
        settings.sheet_path.display(),
        decoded.width(),
        decoded.height(),
        layout.cols,
        layout.rows
    );

    let image = images.add(Image::from_dynamic(
        decoded,
        true,
        RenderAssetUsages::default(),
    ));
    commands.insert_resource(SpriteSheet { image, layout });
    Ok(())
}

/// Show the player's current frame at its current position.
pub(crate) fn sync_player_sprite(
    sheet: Res<SpriteSheet>,
    mut query: Query<(&Player, &mut Sprite, &mut Transform)>,
) {
    for (player, mut sprite, mut transform) in &mut query {
        sprite.rect = Some(sheet.image_rect(player.frame_offset()));
        transform.translation = player.position.extend(transform.translation.z);
    }
}
