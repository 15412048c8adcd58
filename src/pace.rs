//! Frame pacing with a drift-correcting accumulator.
//!
//! A naive `sleep(1/fps)` after each frame drifts without bound as soon as
//! producing a frame takes measurable time, because the sleep ignores time
//! already spent. The pacer instead carries a signed time balance across
//! frames: how far ahead of (negative) or behind (positive) the ideal
//! schedule the previous frame finished. The balance is folded into the wait
//! condition for the current frame, so the long-run average rate converges to
//! the target even though individual frame times vary.
//!
//! The wait is a polling loop over short sleeps rather than one coarse sleep.
//! Timing error is then bounded by the poll granularity instead of by a
//! single sleep call's overshoot.

use std::time::{Duration, Instant};

use crate::core::Fps;

/// Granularity of the polling wait.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Injectable time source and sleep primitive.
///
/// Production code uses [`MonotonicClock`]; pacing tests substitute a manual
/// clock so they run instantly and deterministically.
pub trait Clock {
    /// Elapsed time since the clock's epoch.
    fn now(&self) -> Duration;

    fn sleep(&self, dur: Duration);
}

/// Wall clock backed by [`Instant`], monotonic by construction.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, dur: Duration) {
        std::thread::sleep(dur);
    }
}

/// Timestamp token handed out by [`FramePacer::begin`] and consumed by the
/// wait/completion steps of the same frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameStart {
    at: Duration,
}

/// Per-session pacing state: the target interval and the signed accumulator.
///
/// Usage per frame, in order:
/// 1. [`begin`](Self::begin) before producing the frame,
/// 2. [`await_budget`](Self::await_budget) once the frame text is ready,
/// 3. emit the frame,
/// 4. [`complete`](Self::complete) to settle the balance.
pub struct FramePacer<'a> {
    clock: &'a dyn Clock,
    interval_secs: f64,
    accumulator_secs: f64,
}

impl<'a> FramePacer<'a> {
    pub fn new(fps: Fps, clock: &'a dyn Clock) -> Self {
        Self {
            clock,
            interval_secs: fps.frame_duration_secs(),
            accumulator_secs: 0.0,
        }
    }

    pub fn begin(&self) -> FrameStart {
        FrameStart {
            at: self.clock.now(),
        }
    }

    /// Poll until the frame's time budget is spent.
    ///
    /// Returns immediately when the carried balance already covers the
    /// interval (the previous frame overran); the surplus is settled in
    /// [`complete`](Self::complete) and paid down by later frames.
    pub fn await_budget(&self, start: FrameStart) {
        while self.accumulator_secs + self.elapsed_secs(start) < self.interval_secs {
            self.clock.sleep(POLL_INTERVAL);
        }
    }

    /// Fold this frame's actual duration into the balance and return the new
    /// accumulator value (for diagnostics).
    pub fn complete(&mut self, start: FrameStart) -> f64 {
        self.accumulator_secs += self.elapsed_secs(start) - self.interval_secs;
        self.accumulator_secs
    }

    pub fn accumulator_secs(&self) -> f64 {
        self.accumulator_secs
    }

    fn elapsed_secs(&self, start: FrameStart) -> f64 {
        self.clock.now().saturating_sub(start.at).as_secs_f64()
    }
}
