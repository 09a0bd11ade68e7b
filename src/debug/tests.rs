//! Debug domain: tests for tuning adjustments and their key handling.

use bevy::prelude::*;

use super::systems::handle_tuning_hotkeys;
use super::{TuningAction, apply_pressed_tuning, apply_tuning};
use crate::core::DemoSettings;
use crate::movement::Player;
use crate::sprites::WalkAnimation;

fn default_player() -> Player {
    Player::new(Vec2::ZERO, 76.0, WalkAnimation::new(4.5, 9))
}

#[test]
fn test_raise_anim_interval() {
    let mut player = default_player();
    let line = apply_tuning(&mut player, TuningAction::RaiseAnimInterval, 0.5);
    assert_eq!(player.walk.interval, 5.0);
    assert_eq!(line, "animInterval 5.000000");
}

#[test]
fn test_lower_speed() {
    let mut player = default_player();
    let line = apply_tuning(&mut player, TuningAction::LowerSpeed, 0.5);
    assert_eq!(player.speed, 75.5);
    assert_eq!(line, "speed 75.500000");
}

#[test]
fn test_values_may_go_negative() {
    let mut player = default_player();
    for _ in 0..10 {
        apply_tuning(&mut player, TuningAction::LowerAnimInterval, 0.5);
    }
    assert_eq!(player.walk.interval, -0.5);
    assert_eq!(
        apply_tuning(&mut player, TuningAction::RaiseSpeed, 0.5),
        "speed 76.500000"
    );
}

#[test]
fn test_bindings_cover_every_action_once() {
    let actions: Vec<TuningAction> = TuningAction::BINDINGS.iter().map(|(_, a)| *a).collect();
    assert_eq!(
        actions,
        vec![
            TuningAction::RaiseAnimInterval,
            TuningAction::LowerAnimInterval,
            TuningAction::RaiseSpeed,
            TuningAction::LowerSpeed,
        ]
    );
}

#[test]
fn test_one_press_logs_one_line() {
    let mut player = default_player();
    let mut keyboard = ButtonInput::<KeyCode>::default();

    keyboard.press(KeyCode::KeyV);
    assert_eq!(
        apply_pressed_tuning(&keyboard, &mut player, 0.5),
        vec!["animInterval 5.000000".to_string()]
    );

    // Held across later frames: nothing more is applied or logged.
    for _ in 0..3 {
        keyboard.clear();
        assert!(apply_pressed_tuning(&keyboard, &mut player, 0.5).is_empty());
    }
    assert_eq!(player.walk.interval, 5.0);

    keyboard.release(KeyCode::KeyV);
    keyboard.clear();
    keyboard.press(KeyCode::KeyV);
    assert_eq!(
        apply_pressed_tuning(&keyboard, &mut player, 0.5),
        vec!["animInterval 5.500000".to_string()]
    );
}

#[test]
fn test_simultaneous_presses_log_in_binding_order() {
    let mut player = default_player();
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyD);
    keyboard.press(KeyCode::KeyV);

    let lines = apply_pressed_tuning(&keyboard, &mut player, 0.5);
    assert_eq!(lines, vec!["animInterval 5.000000", "speed 75.500000"]);
}

fn tuning_app() -> App {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<DemoSettings>()
        .add_systems(Update, handle_tuning_hotkeys);
    app
}

#[test]
fn test_held_key_applies_once() {
    let mut app = tuning_app();
    let entity = app.world_mut().spawn(default_player()).id();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyV);
    app.update();
    assert_eq!(app.world().get::<Player>(entity).unwrap().walk.interval, 5.0);

    // Still held on the following frames: no further change.
    for _ in 0..3 {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
    }
    assert_eq!(app.world().get::<Player>(entity).unwrap().walk.interval, 5.0);

    // Release and press again for a second step.
    {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release(KeyCode::KeyV);
        keyboard.clear();
        keyboard.press(KeyCode::KeyV);
    }
    app.update();
    assert_eq!(app.world().get::<Player>(entity).unwrap().walk.interval, 5.5);
}

#[test]
fn test_speed_keys_adjust_speed() {
    let mut app = tuning_app();
    let entity = app.world_mut().spawn(default_player()).id();

    {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::KeyF);
        keyboard.press(KeyCode::KeyD);
    }
    app.update();

    // F and D pressed in the same frame cancel out.
    let player = app.world().get::<Player>(entity).unwrap();
    assert_eq!(player.speed, 76.0);
    assert_eq!(player.walk.interval, 4.5);
}
