//! Host-side game driver
//!
//! A [`Session`] sits between the host (browser page or headless runner) and
//! the simulation. The host owns the running flag and calls [`Session::frame`]
//! once per animation frame; input listeners only queue commands, which the
//! next frame applies. Everything runs on one thread, so no locking is needed.

use crate::platform::FrameClock;
use crate::sim::{
    Difficulty, GameEvent, GamePhase, GameState, Steer, SurfaceSize, TickInput, tick,
};

pub struct Session {
    state: GameState,
    clock: FrameClock,
    /// Commands queued since the last frame
    input: TickInput,
    running: bool,
    /// Difficulty to apply at the next start
    pending_difficulty: Option<Difficulty>,
    best_score: u64,
    /// Autopilot steered at least one frame of the current run
    assisted: bool,
}

impl Session {
    pub fn new(seed: u64, difficulty: Difficulty, surface: SurfaceSize) -> Self {
        Self {
            state: GameState::new(seed, difficulty, surface),
            clock: FrameClock::new(),
            input: TickInput::default(),
            running: false,
            pending_difficulty: None,
            best_score: 0,
            assisted: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn difficulty(&self) -> Difficulty {
        self.pending_difficulty.unwrap_or(self.state.difficulty)
    }

    /// Highest crash score seen by this session
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    /// Seed the best score from persisted high scores
    pub fn set_best_score(&mut self, best: u64) {
        self.best_score = self.best_score.max(best);
    }

    /// Host's running flag
    ///
    /// Starting after a crash resets the run first. Stopping clears the frame
    /// clock, so no later frame advances the state until started again.
    pub fn set_running(&mut self, running: bool) {
        if running == self.running {
            return;
        }
        self.running = running;
        self.clock.restart();
        self.input.steer.clear();

        if running {
            if self.state.is_crashed() {
                self.reset();
                self.running = true;
            }
            if let Some(difficulty) = self.pending_difficulty.take() {
                self.state.difficulty = difficulty;
            }
            self.state.phase = GamePhase::Running;
            log::info!(
                "Run started ({}, seed {})",
                self.state.difficulty.as_str(),
                self.state.seed
            );
        } else {
            if self.state.phase == GamePhase::Running {
                self.state.phase = GamePhase::Paused;
            }
            log::info!("Run paused at {}", self.state.reported_score);
        }
    }

    /// Change difficulty; deferred to the next start while running
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.running {
            self.pending_difficulty = Some(difficulty);
        } else {
            self.pending_difficulty = None;
            self.state.difficulty = difficulty;
        }
        log::debug!("Difficulty set to {}", difficulty.as_str());
    }

    /// Queue a lane change for the next frame; ignored unless running
    pub fn steer(&mut self, cmd: Steer) {
        if self.running {
            self.input.steer.push(cmd);
        }
    }

    /// Toggle autopilot steering for this session only
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.idle_mode = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.input.idle_mode
    }

    /// Whether the autopilot drove any part of the current run.
    /// Such runs never count toward the best score.
    pub fn run_is_assisted(&self) -> bool {
        self.assisted
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.input.freeze_markers = reduced;
    }

    pub fn resize(&mut self, surface: SurfaceSize) {
        self.state.resize(surface);
    }

    /// Back to a fresh run: stopped, no obstacles, zero score, centre lane
    pub fn reset(&mut self) {
        self.running = false;
        self.clock.restart();
        self.input.steer.clear();
        if let Some(difficulty) = self.pending_difficulty.take() {
            self.state.difficulty = difficulty;
        }
        self.state.reset();
        self.assisted = false;
        log::info!("Run reset");
    }

    /// Advance one animation frame at host time `now_ms`
    ///
    /// Returns the events produced by this frame. A crash clears the running
    /// flag before returning.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        if !self.running {
            return Vec::new();
        }

        let dt = self.clock.delta(now_ms);
        self.assisted |= self.input.idle_mode;
        tick(&mut self.state, &self.input, dt);
        self.input.steer.clear();

        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::Crashed { score } = *event {
                self.running = false;
                self.clock.restart();
                if !self.assisted {
                    self.best_score = self.best_score.max(score);
                }
                log::info!(
                    "Crashed at {} ({}{}), best {}",
                    score,
                    self.state.difficulty.as_str(),
                    if self.assisted { ", autopilot" } else { "" },
                    self.best_score
                );
            }
        }
        events
    }
}
