//! Idle/demo mode steering
//!
//! Picks at most one lane change per frame: if an obstacle is about to reach
//! the player's lane, step toward the nearest lane that is clear.

use super::state::{GameState, Steer};
use crate::consts::LANE_COUNT;

/// How far above the player an obstacle counts as a threat (pixels)
pub const LOOK_AHEAD: f32 = 220.0;

/// Whether any obstacle in `lane` overlaps the danger window
pub fn lane_threatened(state: &GameState, lane: usize) -> bool {
    let player = state.player.rect();
    let window_top = player.top() - LOOK_AHEAD;
    let window_bottom = player.bottom();

    state.obstacles.iter().filter(|o| o.lane == lane).any(|o| {
        let r = o.rect();
        r.bottom() > window_top && r.top() < window_bottom
    })
}

/// Choose a steering command for this frame, if any
pub fn choose_steer(state: &GameState) -> Option<Steer> {
    let lane = state.player.lane;
    if !lane_threatened(state, lane) {
        return None;
    }

    // Nearest clear lane, preferring left on ties
    let target = (1..LANE_COUNT)
        .flat_map(|d| [lane.checked_sub(d), Some(lane + d)])
        .flatten()
        .filter(|&l| l < LANE_COUNT)
        .find(|&l| !lane_threatened(state, l))?;

    // Only step if the adjacent lane on the way is also clear
    let (step, next) = if target < lane {
        (Steer::Left, lane - 1)
    } else {
        (Steer::Right, lane + 1)
    };
    (!lane_threatened(state, next)).then_some(step)
}
