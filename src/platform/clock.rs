//! Frame clock
//!
//! Turns the host's per-frame wall-clock timestamps (milliseconds) into
//! elapsed seconds for the simulation step.

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp; the next frame reports no elapsed time
    pub fn restart(&mut self) {
        self.last_ms = None;
    }

    /// Seconds since the previous frame
    ///
    /// The first frame after a (re)start is 0. Clock skew backwards reads as
    /// 0, and long gaps (hidden tab, debugger) are capped at `MAX_FRAME_DT`.
    pub fn delta(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_has_no_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(5000.0), 0.0);
        assert!((clock.delta(5016.0) - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_restart_drops_gap() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        clock.restart();
        assert_eq!(clock.delta(90_000.0), 0.0);
        assert!((clock.delta(90_100.0) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        assert_eq!(clock.delta(900.0), 0.0);
        assert_eq!(clock.delta(60_000.0), MAX_FRAME_DT);
        assert_eq!(clock.delta(f64::NAN), 0.0);
    }
}
