//! Shape generation for the road scene
//!
//! All coordinates are surface pixels (origin top-left, y down); the pipeline
//! maps them to clip space.

use super::vertex::{Vertex, colors};
use crate::consts::{MARKER_DASH, MARKER_PERIOD};
use crate::sim::{GameState, Rect};

/// Width of the lane divider dashes
pub const MARKER_WIDTH: f32 = 2.0;

/// Two triangles covering a rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// Dashed vertical line at `x`, dashes shifted down by `offset`
///
/// Starts one period above the top so the scroll never leaves a gap.
pub fn dashed_line(x: f32, height: f32, offset: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let mut y = -MARKER_PERIOD;
    while y < height + MARKER_PERIOD {
        let dash = Rect::new(x - MARKER_WIDTH / 2.0, y + offset, MARKER_WIDTH, MARKER_DASH);
        vertices.extend_from_slice(&rect(&dash, color));
        y += MARKER_PERIOD;
    }
    vertices
}

/// Full frame: road, lane markers, obstacles, then the player on top
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let layout = &state.layout;
    let height = layout.surface.height;
    let mut vertices = Vec::with_capacity(6 * (2 + state.obstacles.len()) + 64);

    let road = Rect::new(layout.road_left, 0.0, layout.road_width(), height);
    vertices.extend_from_slice(&rect(&road, colors::ROAD));

    for x in layout.divider_xs() {
        vertices.extend(dashed_line(x, height, state.road_offset, colors::LANE_MARKER));
    }

    for obstacle in &state.obstacles {
        vertices.extend_from_slice(&rect(&obstacle.rect(), colors::OBSTACLE));
    }

    vertices.extend_from_slice(&rect(&state.player.rect(), colors::PLAYER));
    vertices
}
