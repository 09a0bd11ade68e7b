//! Debug domain: runtime tuning actions and their key bindings.

use bevy::prelude::*;

use crate::movement::Player;

/// Adjustments available while the demo is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningAction {
    RaiseAnimInterval,
    LowerAnimInterval,
    RaiseSpeed,
    LowerSpeed,
}

impl TuningAction {
    /// Key bindings, checked in this order every frame.
    pub const BINDINGS: [(KeyCode, TuningAction); 4] = [
        (KeyCode::KeyV, TuningAction::RaiseAnimInterval),
        (KeyCode::KeyC, TuningAction::LowerAnimInterval),
        (KeyCode::KeyF, TuningAction::RaiseSpeed),
        (KeyCode::KeyD, TuningAction::LowerSpeed),
    ];
}

/// Apply one adjustment of `step` and return the line to log.
///
/// Values are not clamped and may go negative.
pub fn apply_tuning(player: &mut Player, action: TuningAction, step: f32) -> String {
    match action {
        TuningAction::RaiseAnimInterval => player.walk.interval += step,
        TuningAction::LowerAnimInterval => player.walk.interval -= step,
        TuningAction::RaiseSpeed => player.speed += step,
        TuningAction::LowerSpeed => player.speed -= step,
    }

    match action {
        TuningAction::RaiseAnimInterval | TuningAction::LowerAnimInterval => {
            format!("animInterval {:.6}", player.walk.interval)
        }
        TuningAction::RaiseSpeed | TuningAction::LowerSpeed => {
            format!("speed {:.6}", player.speed)
        }
    }
}

/// Apply every tuning key pressed since the last frame and return the lines
/// to log, one per press. Keys that stay held produce nothing.
pub fn apply_pressed_tuning(
    keyboard: &ButtonInput<KeyCode>,
    player: &mut Player,
    step: f32,
) -> Vec<String> {
    TuningAction::BINDINGS
        .iter()
        .filter(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, action)| apply_tuning(player, *action, step))
        .collect()
}
