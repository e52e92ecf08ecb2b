// Game loop timing
//
// Physics advances in fixed timesteps while game logic that is defined per
// rendered frame (input, movement, the level timer) sees the real frame delta.

use std::time::{Duration, Instant};

/// Target physics/update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of physics steps per frame to prevent spiral of death
pub const MAX_PHYSICS_STEPS: u32 = 5;

/// Timing of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the previous frame
    pub delta: f32,
    /// Fixed physics steps to run this frame
    pub steps: u32,
}

/// Game loop timing state
pub struct GameLoop {
    accumulator: Duration,
    last_frame_time: Instant,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a game loop whose first frame is measured from `now`
    pub fn starting_at(now: Instant) -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Begin a new frame
    pub fn begin_frame(&mut self) -> FrameTiming {
        self.begin_frame_at(Instant::now())
    }

    /// Begin a new frame at an explicit instant
    pub fn begin_frame_at(&mut self, now: Instant) -> FrameTiming {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        // Drop whatever the step cap left behind instead of bursting later
        if steps == MAX_PHYSICS_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!(
                "Frame took {:?}, dropping {:?} of simulation",
                frame_time,
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.update_count += steps as u64;
        FrameTiming {
            delta: frame_time.as_secs_f32(),
            steps,
        }
    }

    /// Get total number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of fixed updates executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
    }

    #[test]
    fn test_one_step_per_fixed_interval() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);

        let timing = game_loop.begin_frame_at(start + FIXED_TIMESTEP_DURATION);
        assert_eq!(timing.steps, 1);
        assert!((timing.delta - FIXED_TIMESTEP).abs() < 1e-4);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        let half = FIXED_TIMESTEP_DURATION / 2;

        assert_eq!(game_loop.begin_frame_at(start + half).steps, 0);
        assert_eq!(game_loop.begin_frame_at(start + half * 2).steps, 1);
        assert_eq!(game_loop.update_count(), 1);
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_max_physics_steps_limit() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);

        // 300ms would allow 18 updates
        let timing = game_loop.begin_frame_at(start + Duration::from_millis(300));
        assert_eq!(timing.steps, MAX_PHYSICS_STEPS);

        // Leftover time is dropped, not replayed
        let next = game_loop.begin_frame_at(start + Duration::from_millis(301));
        assert_eq!(next.steps, 0);
    }
}
