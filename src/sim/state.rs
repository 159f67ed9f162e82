//! Game state and core simulation types
//!
//! Everything the per-frame step reads or writes lives in one owned
//! [`GameState`] value.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::{Difficulty, DifficultyProfile};
use super::road::{RoadLayout, SurfaceSize};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh or reset, waiting for the host to start
    Ready,
    /// Active gameplay
    Running,
    /// Host cleared the running flag
    Paused,
    /// Player hit an obstacle; frozen until reset
    Crashed,
}

/// Notifications for the host, drained after each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Floored score changed
    ScoreChanged(u64),
    /// Run ended on a collision, with the frozen score
    Crashed { score: u64 },
}

/// Lane-change command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    Left,
    Right,
}

impl Steer {
    pub fn delta(&self) -> i32 {
        match self {
            Steer::Left => -1,
            Steer::Right => 1,
        }
    }
}

/// The player's car
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub lane: usize,
}

impl Player {
    pub fn new(layout: &RoadLayout) -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            lane: START_LANE,
        };
        player.place(layout);
        player
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move by `delta` lanes, clamped to the road. No-op at either edge.
    pub fn shift_lane(&mut self, delta: i32, layout: &RoadLayout) {
        let max_lane = (LANE_COUNT - 1) as i64;
        let target = (self.lane as i64 + delta as i64).clamp(0, max_lane);
        self.lane = target as usize;
        self.place(layout);
    }

    /// Recompute position from the current lane
    pub fn place(&mut self, layout: &RoadLayout) {
        self.pos = Vec2::new(layout.lane_x(self.lane, self.size.x), layout.player_y());
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub lane: usize,
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed (pixels/second)
    pub speed: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Top edge is at or below the surface bottom
    pub fn is_past(&self, surface: &SurfaceSize) -> bool {
        self.pos.y >= surface.height
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub difficulty: Difficulty,
    pub layout: RoadLayout,
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Unfloored score accumulator
    pub score: f64,
    /// Last floored score reported to the host
    pub reported_score: u64,
    /// Simulated seconds while running
    pub elapsed: f64,
    /// Milliseconds accumulated toward the next spawn
    pub spawn_timer_ms: f64,
    /// Lane marker scroll offset in [0, MARKER_PERIOD)
    pub road_offset: f32,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, difficulty: Difficulty, surface: SurfaceSize) -> Self {
        let layout = RoadLayout::new(surface);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty,
            layout,
            phase: GamePhase::Ready,
            player: Player::new(&layout),
            obstacles: Vec::new(),
            score: 0.0,
            reported_score: 0,
            elapsed: 0.0,
            spawn_timer_ms: 0.0,
            road_offset: 0.0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.profile()
    }

    /// Floored score
    pub fn score_value(&self) -> u64 {
        self.score.floor() as u64
    }

    pub fn is_crashed(&self) -> bool {
        self.phase == GamePhase::Crashed
    }

    /// Allocate a new obstacle ID
    fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Apply a lane change to the player
    pub fn shift_lane(&mut self, delta: i32) {
        self.player.shift_lane(delta, &self.layout);
    }

    /// Spawn one obstacle in a random lane, fully above the top edge
    pub fn spawn_obstacle(&mut self) -> &Obstacle {
        let lane = self.rng.random_range(0..LANE_COUNT);
        let jitter = self.rng.random::<f32>() * OBSTACLE_SPEED_JITTER;
        let speed = self.profile().base_speed + jitter;
        self.push_obstacle(lane, speed)
    }

    /// Place an obstacle in `lane` just above the top edge
    pub fn push_obstacle(&mut self, lane: usize, speed: f32) -> &Obstacle {
        let lane = lane.min(LANE_COUNT - 1);
        let id = self.next_obstacle_id();
        let x = self.layout.lane_x(lane, OBSTACLE_WIDTH);
        self.obstacles.push(Obstacle {
            id,
            lane,
            pos: Vec2::new(x, -OBSTACLE_HEIGHT),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            speed,
        });
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Change the surface size; player and obstacles keep their lanes
    pub fn resize(&mut self, surface: SurfaceSize) {
        self.layout = RoadLayout::new(surface);
        self.player.place(&self.layout);
        for obstacle in &mut self.obstacles {
            obstacle.pos.x = self.layout.lane_x(obstacle.lane, obstacle.size.x);
        }
    }

    /// Clear the run: no obstacles, zero score, centre lane, crash cleared.
    ///
    /// The RNG keeps its position so consecutive runs differ.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.score = 0.0;
        self.reported_score = 0;
        self.elapsed = 0.0;
        self.spawn_timer_ms = 0.0;
        self.road_offset = 0.0;
        self.events.clear();
        self.player.lane = START_LANE;
        self.player.place(&self.layout);
        self.phase = GamePhase::Ready;
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(42, Difficulty::Normal, SurfaceSize::default())
    }

    #[test]
    fn test_player_starts_in_centre_lane() {
        let state = new_state();
        assert_eq!(state.player.lane, START_LANE);
        assert!((state.player.pos.x - 160.0).abs() < 1e-4);
        assert!((state.player.pos.y - 510.0).abs() < 1e-4);
    }

    #[test]
    fn test_shift_lane_is_noop_at_edges() {
        let mut state = new_state();
        state.shift_lane(-1);
        assert_eq!(state.player.lane, 0);
        let x = state.player.pos.x;
        state.shift_lane(-1);
        assert_eq!(state.player.lane, 0);
        assert_eq!(state.player.pos.x, x);

        state.shift_lane(5);
        assert_eq!(state.player.lane, LANE_COUNT - 1);
    }

    #[test]
    fn test_spawned_obstacle_starts_above_top_edge() {
        let mut state = new_state();
        for _ in 0..50 {
            let o = state.spawn_obstacle().clone();
            assert!(o.rect().bottom() <= 0.0);
            assert!(o.lane < LANE_COUNT);
            let base = Difficulty::Normal.profile().base_speed;
            assert!(o.speed >= base && o.speed < base + OBSTACLE_SPEED_JITTER);
        }
    }

    #[test]
    fn test_obstacle_ids_are_unique() {
        let mut state = new_state();
        let a = state.spawn_obstacle().id;
        let b = state.spawn_obstacle().id;
        assert_ne!(a, b);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = new_state();
        state.phase = GamePhase::Crashed;
        state.score = 123.4;
        state.reported_score = 123;
        state.shift_lane(1);
        state.spawn_obstacle();
        state.events.push(GameEvent::Crashed { score: 123 });

        state.reset();
        let once = (
            state.phase,
            state.score,
            state.reported_score,
            state.player.clone(),
            state.obstacles.len(),
            state.events.len(),
            state.spawn_timer_ms,
        );
        state.reset();
        let twice = (
            state.phase,
            state.score,
            state.reported_score,
            state.player.clone(),
            state.obstacles.len(),
            state.events.len(),
            state.spawn_timer_ms,
        );

        assert_eq!(once, twice);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.player.lane, START_LANE);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_resize_keeps_lanes() {
        let mut state = new_state();
        state.shift_lane(1);
        state.push_obstacle(0, 200.0);
        state.resize(SurfaceSize::new(400.0, 700.0));

        assert_eq!(state.player.lane, 2);
        assert!((state.player.pos.x - state.layout.lane_x(2, PLAYER_WIDTH)).abs() < 1e-4);
        assert!((state.player.pos.y - 610.0).abs() < 1e-4);
        assert!((state.obstacles[0].pos.x - state.layout.lane_x(0, OBSTACLE_WIDTH)).abs() < 1e-4);
    }

    #[test]
    fn test_same_seed_spawns_same_obstacles() {
        let mut a = new_state();
        let mut b = new_state();
        for _ in 0..20 {
            let oa = a.spawn_obstacle().clone();
            let ob = b.spawn_obstacle().clone();
            assert_eq!(oa, ob);
        }
    }

    proptest! {
        #[test]
        fn prop_lane_stays_in_range(deltas in proptest::collection::vec(-3i32..=3, 0..64)) {
            let mut state = new_state();
            for d in deltas {
                state.shift_lane(d);
                prop_assert!(state.player.lane < LANE_COUNT);
                let expected_x = state.layout.lane_x(state.player.lane, PLAYER_WIDTH);
                prop_assert!((state.player.pos.x - expected_x).abs() < 1e-4);
            }
        }
    }
}
