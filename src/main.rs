mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod sprites;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use std::path::Path;

use crate::core::{DemoSettings, SETTINGS_PATH};

fn main() -> AppExit {
    let (settings, origin) = match DemoSettings::load_or_default(Path::new(SETTINGS_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}", e);
            return AppExit::error();
        }
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: settings.window_title.clone(),
                    resolution: WindowResolution::new(
                        settings.window_width,
                        settings.window_height,
                    ),
                    resizable: settings.resizable,
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(settings)
    .insert_resource(origin)
    .add_plugins((
        core::CorePlugin,
        sprites::SpritesPlugin,
        movement::MovementPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run()
}
