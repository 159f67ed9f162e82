//! Per-frame simulation step
//!
//! Order within a frame is fixed: lane commands, obstacle motion, collision,
//! score, spawning. Collision therefore always sees this frame's obstacle
//! positions, and a freshly spawned obstacle never collides on its first frame.

use super::autopilot;
use super::state::{GameEvent, GamePhase, GameState, Steer};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Lane changes queued since the last frame, applied in order
    pub steer: Vec<Steer>,
    /// Idle/demo mode - autopilot steers
    pub idle_mode: bool,
    /// Hold lane markers still (reduced motion)
    pub freeze_markers: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) {
    if state.phase != GamePhase::Running {
        return;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    for cmd in &input.steer {
        state.shift_lane(cmd.delta());
    }
    if input.idle_mode {
        if let Some(cmd) = autopilot::choose_steer(state) {
            state.shift_lane(cmd.delta());
        }
    }

    // Move obstacles and drop the ones fully past the bottom edge
    let dt32 = dt as f32;
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.speed * dt32;
    }
    let surface = state.layout.surface;
    state.obstacles.retain(|o| !o.is_past(&surface));

    if !input.freeze_markers {
        let marker_speed = state.profile().base_speed * MARKER_SPEED_FACTOR;
        state.road_offset = (state.road_offset + dt32 * marker_speed).rem_euclid(MARKER_PERIOD);
    }

    // First overlap ends the run; score stays at last frame's value
    let player = state.player.rect();
    if state.obstacles.iter().any(|o| o.rect().overlaps(&player)) {
        state.phase = GamePhase::Crashed;
        state.events.push(GameEvent::Crashed {
            score: state.reported_score,
        });
        return;
    }

    state.elapsed += dt;
    state.score += dt * SCORE_RATE;
    let floored = state.score_value();
    if floored != state.reported_score {
        state.reported_score = floored;
        state.events.push(GameEvent::ScoreChanged(floored));
    }

    let interval = state.profile().spawn_interval_ms;
    state.spawn_timer_ms += dt * 1000.0;
    while state.spawn_timer_ms >= interval {
        state.spawn_timer_ms -= interval;
        state.spawn_obstacle();
    }
}
