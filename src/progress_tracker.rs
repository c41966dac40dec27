use std::fmt;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard};
use std::time::Duration;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

use log::{debug, trace};
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use crate::builder::TrackerBuilder;
use crate::draw_target::DrawTarget;
use crate::error::Result;
use crate::state::{ProgressState, TrackerState};
use crate::style::Theme;

/// A single-line progress bar that counts towards a fixed maximum
///
/// The tracker is an [`Arc`] around its internal state. When it is cloned it just increments the
/// refcount, so the original and its clone share the same count and output. This is how one
/// tracker is handed to several worker threads.
///
/// The bar is only redrawn by [`advance`](ProgressTracker::advance) when the whole percentage
/// changes, so advancing in small steps is cheap.
#[derive(Clone)]
pub struct ProgressTracker {
    inner: Arc<Shared>,
}

struct Shared {
    max: u64,
    width: usize,
    theme: Theme,
    /// Always locked before `draw_target`.
    state: RwLock<TrackerState>,
    draw_target: Mutex<DrawTarget>,
}

impl fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("max", &self.inner.max)
            .field("width", &self.inner.width)
            .finish_non_exhaustive()
    }
}

impl ProgressTracker {
    /// Creates a new tracker for `max` units of work
    ///
    /// The bar is 40 cells wide, uses the default [`Theme`] and draws to stdout. Nothing is drawn
    /// until the first advance that reaches 1%.
    pub fn new(max: u64) -> ProgressTracker {
        TrackerBuilder::new(max).build()
    }

    /// Starts configuring a tracker for `max` units of work
    pub fn builder(max: u64) -> TrackerBuilder {
        TrackerBuilder::new(max)
    }

    pub(crate) fn from_parts(
        max: u64,
        width: usize,
        theme: Theme,
        draw_target: DrawTarget,
    ) -> ProgressTracker {
        debug!("creating progress tracker: max={} width={}", max, width);
        ProgressTracker {
            inner: Arc::new(Shared {
                max,
                width,
                theme,
                state: RwLock::new(TrackerState::new(Instant::now())),
                draw_target: Mutex::new(draw_target),
            }),
        }
    }

    /// Advances the count by `delta` and redraws if the whole percentage changed
    ///
    /// The update and the redraw happen under one exclusive lock, so concurrent callers never
    /// interleave their lines.
    ///
    /// # Errors
    ///
    /// * [`InvalidConfiguration`] if the tracker was built with a maximum of zero. Nothing is
    ///   changed or drawn.
    /// * [`MaximumExceeded`] if the count is now above the maximum. The new count stays in the
    ///   tracker and nothing is drawn for this call, even if the percentage changed. This check
    ///   comes first, so a call never reports both this and a write failure.
    /// * [`WriteFailure`] if the redraw could not be written. The new count stays in the tracker.
    ///
    /// [`InvalidConfiguration`]: crate::ProgressError::InvalidConfiguration
    /// [`MaximumExceeded`]: crate::ProgressError::MaximumExceeded
    /// [`WriteFailure`]: crate::ProgressError::WriteFailure
    pub fn advance(&self, delta: u64) -> Result<()> {
        let redrawn = {
            let mut state = self.inner.state.write().unwrap();
            if state.advance(self.inner.max, self.inner.width, delta)? {
                let now = Instant::now();
                self.draw(&state, now)?;
                state.last_shown = now;
                true
            } else {
                false
            }
        };

        // logged outside the lock so a `LogWrapper` around this tracker can't deadlock
        if redrawn {
            trace!("progress redrawn after advancing by {}", delta);
        }
        Ok(())
    }

    /// Draws the bar for the current state without changing it
    ///
    /// Use this to show a 0% bar before any work is done, or to repaint after other output.
    pub fn render_blank(&self) -> Result<()> {
        let state = self.state_guard();
        self.draw(&state, Instant::now())
    }

    /// Resets the count and restarts the elapsed-time clock
    ///
    /// Configuration is kept. Nothing is drawn; the next advance that reaches 1% redraws.
    pub fn reset(&self) {
        self.inner.state.write().unwrap().reset(Instant::now());
        debug!("progress tracker reset");
    }

    /// Hide the progress bar temporarily, execute `f`, then redraw the progress bar
    ///
    /// Useful for external code that writes to the same output as the bar. The bar is only
    /// redrawn if it was visible before. Errors from clearing or redrawing are dropped.
    ///
    /// `f` must not call back into this tracker, it runs while the tracker's locks are held.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        let state = self.state_guard();
        let mut draw_target = self.inner.draw_target.lock().unwrap();
        let was_drawn = draw_target.has_drawn();
        let _ = draw_target.clear();

        let rv = f();

        if was_drawn {
            let line = self.format_line(&state, Instant::now());
            let _ = draw_target.draw(&line);
        }
        rv
    }

    /// Returns a snapshot of the current state
    pub fn state(&self) -> ProgressState {
        self.state_guard().snapshot(self.inner.max, Instant::now())
    }

    /// Returns the current count
    pub fn position(&self) -> u64 {
        self.state_guard().count
    }

    /// Returns the current whole percentage
    pub fn percent(&self) -> u64 {
        self.state_guard().percent
    }

    /// Returns the number of filled cells
    pub fn fill_width(&self) -> usize {
        self.state_guard().fill_width
    }

    /// Returns the elapsed time since construction or the last reset
    pub fn elapsed(&self) -> Duration {
        self.state().elapsed()
    }

    /// Returns the current ETA
    pub fn eta(&self) -> Duration {
        self.state().eta()
    }

    /// Returns when the bar was last redrawn by an advance, or reset
    pub fn last_shown(&self) -> Instant {
        self.state_guard().last_shown
    }

    /// Indicates that the count reached the maximum
    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn max(&self) -> u64 {
        self.inner.max
    }

    pub fn width(&self) -> usize {
        self.inner.width
    }

    pub fn theme(&self) -> &Theme {
        &self.inner.theme
    }

    /// A quick convenience check if the tracker is hidden
    pub fn is_hidden(&self) -> bool {
        self.inner.draw_target.lock().unwrap().is_hidden()
    }

    fn state_guard(&self) -> RwLockReadGuard<'_, TrackerState> {
        self.inner.state.read().unwrap()
    }

    fn format_line(&self, state: &TrackerState, now: Instant) -> String {
        self.inner
            .theme
            .format_line(&state.snapshot(self.inner.max, now), self.inner.width)
    }

    fn draw(&self, state: &TrackerState, now: Instant) -> Result<()> {
        let line = self.format_line(state, now);
        self.inner.draw_target.lock().unwrap().draw(&line)?;
        Ok(())
    }
}
