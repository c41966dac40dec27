use std::time::Duration;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use crate::error::{ProgressError, Result};

/// The mutable part of a tracker, guarded by the tracker's lock.
#[derive(Debug)]
pub(crate) struct TrackerState {
    pub(crate) count: u64,
    pub(crate) percent: u64,
    pub(crate) last_rendered_percent: u64,
    pub(crate) fill_width: usize,
    pub(crate) started: Instant,
    pub(crate) last_shown: Instant,
}

impl TrackerState {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            count: 0,
            percent: 0,
            last_rendered_percent: 0,
            fill_width: 0,
            started: now,
            last_shown: now,
        }
    }

    /// Puts the state back to its blank form and restarts the clock at `now`.
    pub(crate) fn reset(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    /// Adds `delta` to the count and recomputes the derived values.
    ///
    /// Returns whether the displayed percentage changed enough to redraw. The state is updated
    /// before the count is checked against `max`, so a [`ProgressError::MaximumExceeded`] leaves
    /// the over-limit count in place.
    pub(crate) fn advance(&mut self, max: u64, width: usize, delta: u64) -> Result<bool> {
        if max == 0 {
            return Err(ProgressError::InvalidConfiguration);
        }

        self.count = self.count.saturating_add(delta);
        let ratio = self.count as f64 / max as f64;
        self.fill_width = (ratio * width as f64) as usize;
        self.percent = (ratio * 100.0) as u64;

        let redraw = self.percent != self.last_rendered_percent && self.percent > 0;
        self.last_rendered_percent = self.percent;

        if self.count > max {
            return Err(ProgressError::MaximumExceeded {
                count: self.count,
                max,
            });
        }

        Ok(redraw)
    }

    /// Captures the values a render needs at `now`.
    pub(crate) fn snapshot(&self, max: u64, now: Instant) -> ProgressState {
        let elapsed = now.saturating_duration_since(self.started);
        let eta = if self.count == 0 {
            Duration::ZERO
        } else {
            let left = elapsed.as_secs_f64() / self.count as f64
                * max.saturating_sub(self.count) as f64;
            Duration::from_secs(left as u64)
        };

        ProgressState {
            count: self.count,
            max,
            percent: self.percent,
            last_rendered_percent: self.last_rendered_percent,
            fill_width: self.fill_width,
            elapsed: Duration::from_secs(elapsed.as_secs()),
            eta,
        }
    }
}

/// The state of a progress tracker at a moment in time.
///
/// Obtained through [`ProgressTracker::state()`](crate::ProgressTracker::state). Durations are
/// truncated to whole seconds, the same way they are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressState {
    pub(crate) count: u64,
    pub(crate) max: u64,
    pub(crate) percent: u64,
    pub(crate) last_rendered_percent: u64,
    pub(crate) fill_width: usize,
    pub(crate) elapsed: Duration,
    pub(crate) eta: Duration,
}

impl ProgressState {
    /// Units of work completed so far. Can be larger than [`ProgressState::max()`] after an
    /// advance that failed with [`ProgressError::MaximumExceeded`].
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Whole percentage of `count / max`, rounded down.
    pub fn percent(&self) -> u64 {
        self.percent
    }

    /// The percentage recorded by the most recent advance.
    pub fn last_rendered_percent(&self) -> u64 {
        self.last_rendered_percent
    }

    /// Number of filled cells in the bar.
    pub fn fill_width(&self) -> usize {
        self.fill_width
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Estimated time remaining, extrapolated linearly from the elapsed time.
    pub fn eta(&self) -> Duration {
        self.eta
    }

    /// Returns the completion as a floating-point number between 0 and 1
    pub fn fraction(&self) -> f32 {
        let pct = match (self.count, self.max) {
            (_, 0) => 0.0,
            (count, max) => count as f32 / max as f32,
        };
        pct.clamp(0.0, 1.0)
    }

    /// True once the count has reached a non-zero maximum.
    pub fn is_finished(&self) -> bool {
        self.max > 0 && self.count >= self.max
    }
}
