//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (host timestamps to frame deltas)
//! - Input events (keys and touches to lane changes)
//! - Storage (LocalStorage on web, no-op on native)

pub mod clock;
pub mod input;
pub mod storage;

pub use clock::FrameClock;
pub use input::{steer_for_key, steer_for_touch};
