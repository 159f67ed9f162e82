//! Lane Dodger - A three-lane car dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, obstacles, collisions, score)
//! - `platform`: Frame clock and input mapping shared by web and native hosts
//! - `session`: Host-side driver owning the running flag and command queue
//! - `renderer`: WebGPU rendering pipeline
//! - `settings` / `highscores`: Persisted preferences and leaderboard

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of parallel lanes
    pub const LANE_COUNT: usize = 3;
    /// Lane the player starts in (and returns to on reset)
    pub const START_LANE: usize = 1;
    /// Width of one lane as a fraction of the surface width
    pub const LANE_WIDTH_FRACTION: f32 = 0.2;

    /// Player car size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    /// Distance from the surface bottom to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 90.0;

    /// Obstacle size
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 60.0;
    /// Random speed added on top of the difficulty base speed, [0, JITTER)
    pub const OBSTACLE_SPEED_JITTER: f32 = 60.0;

    /// Score points per simulated second
    pub const SCORE_RATE: f64 = 100.0;

    /// Lane marker dash period and length (pixels)
    pub const MARKER_PERIOD: f32 = 40.0;
    pub const MARKER_DASH: f32 = 20.0;
    /// Lane marker scroll speed relative to the base obstacle speed
    pub const MARKER_SPEED_FACTOR: f32 = 0.8;

    /// Longest frame the clock will report (seconds)
    pub const MAX_FRAME_DT: f64 = 0.25;

    /// Default surface size
    pub const DEFAULT_SURFACE_WIDTH: f32 = 360.0;
    pub const DEFAULT_SURFACE_HEIGHT: f32 = 600.0;
    /// Smallest surface the simulation accepts
    pub const MIN_SURFACE_WIDTH: f32 = 200.0;
    pub const MIN_SURFACE_HEIGHT: f32 = 240.0;
}
