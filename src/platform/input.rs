//! Input mapping
//!
//! Keyboard keys and touch/click positions become lane-change commands.

use crate::sim::Steer;

/// Map a `KeyboardEvent.key` value to a lane change
pub fn steer_for_key(key: &str) -> Option<Steer> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Steer::Left),
        "ArrowRight" | "d" | "D" => Some(Steer::Right),
        _ => None,
    }
}

/// Map a touch/click x coordinate on a surface of `width` to a lane change
pub fn steer_for_touch(x: f32, width: f32) -> Steer {
    if x < width / 2.0 {
        Steer::Left
    } else {
        Steer::Right
    }
}
