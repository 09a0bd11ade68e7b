//! Movement domain: system modules for input sampling and locomotion.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{apply_movement, spawn_player};
