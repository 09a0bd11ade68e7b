//! Core domain: settings, camera and per-frame system ordering.

mod settings;


pub use settings::{DemoSettings, SETTINGS_PATH, SettingsOrigin};

use bevy::prelude::*;

/// Order of work inside one frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Poll the keyboard and resolve this tick's direction.
    Input,
    /// Apply runtime parameter adjustments.
    Tuning,
    /// Move the player and step its animation.
    Simulate,
    /// Push the result into the sprite and transform.
    Present,
}

/// Startup ordering: the sheet must be decoded before anything draws from it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartupSet {
    LoadSheet,
    Spawn,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoSettings>()
            .configure_sets(Startup, (StartupSet::LoadSheet, StartupSet::Spawn).chain())
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Tuning,
                    FrameSet::Simulate,
                    FrameSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, (setup_camera, log_settings_origin));
    }
}

/// Camera whose viewport origin is the window's bottom-left corner, so world
/// space starts there with y up and stays that way through resizes.
fn setup_camera(mut commands: Commands, settings: Res<DemoSettings>) {
    commands.insert_resource(ClearColor(settings.clear_color()));
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            viewport_origin: Vec2::ZERO,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

fn log_settings_origin(origin: Option<Res<SettingsOrigin>>) {
    match origin.as_deref() {
        Some(SettingsOrigin::File(path)) => info!("Loaded settings from {}", path.display()),
        Some(SettingsOrigin::Defaults(path)) => {
            warn!("No settings file at {}, using defaults", path.display())
        }
        None => {}
    }
}
