/// Fixed-rate tick scheduling
///
/// The simulation advances in ticks of constant length while drawing happens
/// once per window frame. Each frame reports how many ticks are due.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Most ticks run in a single frame; the rest of a long stall is dropped
const MAX_TICKS_PER_FRAME: u32 = 5;

/// FPS is averaged over this many frames
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
#[derive(Debug)]
pub struct GameLoop {
    /// Length of one simulation tick
    tick: Duration,

    /// Time not yet consumed by ticks
    accumulator: Duration,

    last_frame_time: Instant,

    paused: bool,

    /// Recent frame durations for FPS calculation
    frame_times: VecDeque<Duration>,

    frame_count: u64,
    tick_count: u64,
    current_fps: f32,
}

impl GameLoop {
    /// Create a loop running `ticks_per_second` simulation ticks
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of wall clock, returns the number of ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.tick && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.tick;
            ticks += 1;
        }

        // Drop whatever the cap left behind instead of catching up later
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Average frame rate over the last frames
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total number of ticks handed out
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Time spent paused must not turn into a burst of ticks
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        let total: Duration = self.frame_times.iter().sum();
        let average = total.as_secs_f32() / self.frame_times.len().max(1) as f32;

        self.current_fps = if average > 0.0 { 1.0 / average } else { 0.0 };
    }
}
