//! Frame timing
//!
//! [`FrameTimer`] is a stopwatch over a millisecond [`Clock`] with
//! start/stop and pause/unpause. [`FrameLimiter`] and [`FpsCounter`] build on
//! it to cap and measure the frame rate.

use crate::platform::time::{Clock, SystemClock};

/// Pausable millisecond timer
///
/// `started` and `paused` are independent flags, giving three states:
/// stopped, running, and running but paused.
#[derive(Debug, Clone)]
pub struct FrameTimer<C: Clock = SystemClock> {
    clock: C,
    /// Clock reading the elapsed time is measured from
    start_ticks: u64,
    /// Elapsed time captured at pause
    paused_ticks: u64,
    started: bool,
    paused: bool,
}

impl FrameTimer<SystemClock> {
    /// Stopped timer on the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for FrameTimer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FrameTimer<C> {
    /// Stopped timer on the given clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            start_ticks: 0,
            paused_ticks: 0,
            started: false,
            paused: false,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn start(&mut self) {
        self.started = true;
        self.paused = false;
        self.start_ticks = self.clock.ticks_ms();
        self.paused_ticks = 0;
    }

    pub fn stop(&mut self) {
        self.started = false;
        self.paused = false;
        self.start_ticks = 0;
        self.paused_ticks = 0;
    }

    /// Freeze the elapsed time. Ignored unless running and unpaused.
    pub fn pause(&mut self) {
        if self.started && !self.paused {
            self.paused = true;
            self.paused_ticks = self.clock.ticks_ms().saturating_sub(self.start_ticks);
            self.start_ticks = 0;
        }
    }

    /// Resume from the frozen elapsed time. Ignored unless running and paused.
    pub fn unpause(&mut self) {
        if self.started && self.paused {
            self.paused = false;
            self.start_ticks = self.clock.ticks_ms().saturating_sub(self.paused_ticks);
            self.paused_ticks = 0;
        }
    }

    /// Stop if started, otherwise start
    pub fn toggle_start(&mut self) {
        if self.started {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Unpause if paused, otherwise pause
    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            self.unpause();
        } else {
            self.pause();
        }
    }

    /// Milliseconds on the timer
    pub fn elapsed(&self) -> u64 {
        if !self.started {
            return 0;
        }
        if self.paused {
            self.paused_ticks
        } else {
            self.clock.ticks_ms().saturating_sub(self.start_ticks)
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused && self.started
    }
}

/// Caps the frame rate by sleeping away each frame's unused budget
#[derive(Debug, Clone)]
pub struct FrameLimiter<C: Clock = SystemClock> {
    cap_timer: FrameTimer<C>,
    ticks_per_frame: u64,
}

impl<C: Clock> FrameLimiter<C> {
    /// Limiter for `target_fps` frames per second (at least 1)
    pub fn new(clock: C, target_fps: u32) -> Self {
        Self {
            cap_timer: FrameTimer::with_clock(clock),
            ticks_per_frame: 1000 / target_fps.max(1) as u64,
        }
    }

    /// Millisecond budget per frame
    pub fn ticks_per_frame(&self) -> u64 {
        self.ticks_per_frame
    }

    /// Mark the start of a frame
    pub fn begin_frame(&mut self) {
        self.cap_timer.start();
    }

    /// Mark the end of a frame, waiting out the remaining budget.
    /// Returns how long it waited.
    pub fn end_frame(&mut self) -> u64 {
        let frame_ticks = self.cap_timer.elapsed();
        if frame_ticks < self.ticks_per_frame {
            let wait = self.ticks_per_frame - frame_ticks;
            self.cap_timer.clock().delay(wait);
            wait
        } else {
            0
        }
    }
}

/// Average frame rate since the counter started
#[derive(Debug, Clone)]
pub struct FpsCounter<C: Clock = SystemClock> {
    timer: FrameTimer<C>,
    frames: u64,
}

impl<C: Clock> FpsCounter<C> {
    /// Averages above this are treated as a measurement glitch
    pub const MAX_REPORTED_FPS: f64 = 2_000_000.0;

    pub fn new(clock: C) -> Self {
        let mut timer = FrameTimer::with_clock(clock);
        timer.start();
        Self { timer, frames: 0 }
    }

    /// Count one rendered frame
    pub fn frame(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames per second averaged over the whole run
    pub fn average(&self) -> f64 {
        let elapsed = self.timer.elapsed();
        if elapsed == 0 {
            return 0.0;
        }
        let fps = self.frames as f64 / (elapsed as f64 / 1000.0);
        if fps > Self::MAX_REPORTED_FPS { 0.0 } else { fps }
    }

    /// Restart counting from zero
    pub fn reset(&mut self) {
        self.frames = 0;
        self.timer.start();
    }
}
