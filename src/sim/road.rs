//! Road layout: surface size and lane geometry
//!
//! The road is `LANE_COUNT` lanes wide, each lane a fixed fraction of the
//! surface width, centred horizontally.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl SurfaceSize {
    /// Create a surface size, clamped to the smallest playable area
    pub fn new(width: f32, height: f32) -> Self {
        let width = if width.is_finite() { width } else { DEFAULT_SURFACE_WIDTH };
        let height = if height.is_finite() { height } else { DEFAULT_SURFACE_HEIGHT };
        Self {
            width: width.max(MIN_SURFACE_WIDTH),
            height: height.max(MIN_SURFACE_HEIGHT),
        }
    }

    /// Pick a portrait surface size that fits a browser viewport
    ///
    /// Width stays within 300..=420 with a 12 px gutter each side; height
    /// aims for a 1.6 aspect and leaves 160 px for the page chrome.
    pub fn fit_viewport(inner_width: f32, inner_height: f32) -> Self {
        let width = (inner_width - 24.0).min(420.0).max(300.0);
        let height = (width * 1.6).floor().max(520.0).min(inner_height - 160.0);
        Self::new(width, height)
    }
}

/// Lane geometry derived from a surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadLayout {
    pub surface: SurfaceSize,
    pub lane_width: f32,
    pub road_left: f32,
}

impl RoadLayout {
    pub fn new(surface: SurfaceSize) -> Self {
        let lane_width = surface.width * LANE_WIDTH_FRACTION;
        let road_left = (surface.width - lane_width * LANE_COUNT as f32) / 2.0;
        Self {
            surface,
            lane_width,
            road_left,
        }
    }

    pub fn road_width(&self) -> f32 {
        self.lane_width * LANE_COUNT as f32
    }

    /// Left x of an object of `width` centred in `lane`
    pub fn lane_x(&self, lane: usize, width: f32) -> f32 {
        self.road_left + lane as f32 * self.lane_width + (self.lane_width - width) / 2.0
    }

    /// Top y of the player car
    pub fn player_y(&self) -> f32 {
        self.surface.height - PLAYER_BOTTOM_OFFSET
    }

    /// X positions of the dividers between lanes
    pub fn divider_xs(&self) -> impl Iterator<Item = f32> + '_ {
        (1..LANE_COUNT).map(move |i| self.road_left + i as f32 * self.lane_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_centres_road() {
        let layout = RoadLayout::new(SurfaceSize::default());
        assert!((layout.lane_width - 72.0).abs() < 1e-4);
        assert!((layout.road_left - 72.0).abs() < 1e-4);
        assert!((layout.road_left * 2.0 + layout.road_width() - 360.0).abs() < 1e-4);
    }

    #[test]
    fn test_lane_x_centres_object() {
        let layout = RoadLayout::new(SurfaceSize::default());
        // Centre lane: 72 + 72 + (72 - 40) / 2
        assert!((layout.lane_x(1, 40.0) - 160.0).abs() < 1e-4);
        assert!(layout.lane_x(0, 40.0) < layout.lane_x(1, 40.0));
        assert!(layout.lane_x(1, 40.0) < layout.lane_x(2, 40.0));
    }

    #[test]
    fn test_surface_is_clamped() {
        let s = SurfaceSize::new(10.0, -5.0);
        assert_eq!(s.width, MIN_SURFACE_WIDTH);
        assert_eq!(s.height, MIN_SURFACE_HEIGHT);

        let s = SurfaceSize::new(f32::NAN, f32::INFINITY);
        assert_eq!(s, SurfaceSize::default());
    }

    #[test]
    fn test_fit_viewport() {
        let s = SurfaceSize::fit_viewport(1920.0, 1080.0);
        assert_eq!(s.width, 420.0);
        assert_eq!(s.height, 672.0);

        // Phone: narrow and short
        let s = SurfaceSize::fit_viewport(320.0, 640.0);
        assert_eq!(s.width, 300.0);
        assert_eq!(s.height, 480.0);
    }

    #[test]
    fn test_dividers_sit_between_lanes() {
        let layout = RoadLayout::new(SurfaceSize::default());
        let xs: Vec<f32> = layout.divider_xs().collect();
        assert_eq!(xs.len(), LANE_COUNT - 1);
        assert!((xs[0] - 144.0).abs() < 1e-4);
        assert!((xs[1] - 216.0).abs() < 1e-4);
    }
}
