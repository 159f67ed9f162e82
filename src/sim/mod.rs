//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is supplied by the caller
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod road;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use road::{RoadLayout, SurfaceSize};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player, Steer};
pub use tick::{TickInput, tick};
