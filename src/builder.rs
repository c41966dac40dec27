//! Fluent interface for constructing [`ProgressTracker`] instances.
//!
//! [`ProgressTracker::new`] covers the common case of a 40 cell bar on stdout. The
//! [`TrackerBuilder`] is used when the width, the glyphs or the output need to change, or when a
//! 0% bar should be visible before the first unit of work completes.

use std::borrow::Cow;

use log::warn;

use crate::draw_target::DrawTarget;
use crate::progress_tracker::ProgressTracker;
use crate::style::Theme;

const DEFAULT_WIDTH: usize = 40;

/// Configuration for a [`ProgressTracker`], assembled before construction.
///
/// Setters can be called in any order; later calls override earlier ones.
///
/// ```rust,no_run
/// use linebar::{DrawTarget, ProgressTracker, Theme};
///
/// let tracker = ProgressTracker::builder(250)
///     .width(20)
///     .theme(Theme::ascii())
///     .draw_target(DrawTarget::stderr())
///     .render_blank_on_create(true)
///     .build();
/// # let _ = tracker;
/// ```
#[derive(Debug)]
pub struct TrackerBuilder {
    max: u64,
    width: usize,
    theme: Theme,
    draw_target: DrawTarget,
    render_blank_on_create: bool,
}

impl TrackerBuilder {
    /// Starts building a tracker for `max` units of work.
    ///
    /// A `max` of zero is accepted here; it is reported by the first
    /// [`advance`](ProgressTracker::advance) instead.
    #[must_use]
    pub fn new(max: u64) -> Self {
        Self {
            max,
            width: DEFAULT_WIDTH,
            theme: Theme::default(),
            draw_target: DrawTarget::default(),
            render_blank_on_create: false,
        }
    }

    /// Sets the number of cells that represent 100%.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the glyphs the bar is drawn with.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replaces only the filled-cell glyph of the current theme.
    #[must_use]
    pub fn saucer(mut self, saucer: impl Into<Cow<'static, str>>) -> Self {
        self.theme.saucer = saucer.into();
        self
    }

    /// Sets where the bar is written to. Defaults to stdout.
    #[must_use]
    pub fn draw_target(mut self, draw_target: DrawTarget) -> Self {
        self.draw_target = draw_target;
        self
    }

    /// Draws a 0% bar as part of [`build`](TrackerBuilder::build).
    #[must_use]
    pub fn render_blank_on_create(mut self, render: bool) -> Self {
        self.render_blank_on_create = render;
        self
    }

    /// Consumes the builder and returns the constructed [`ProgressTracker`].
    ///
    /// This never fails. If the blank render requested with
    /// [`render_blank_on_create`](TrackerBuilder::render_blank_on_create) can't be written, the
    /// error is logged and dropped.
    pub fn build(self) -> ProgressTracker {
        let render_blank = self.render_blank_on_create;
        let tracker =
            ProgressTracker::from_parts(self.max, self.width, self.theme, self.draw_target);
        if render_blank {
            if let Err(err) = tracker.render_blank() {
                warn!("could not render blank progress bar: {}", err);
            }
        }
        tracker
    }
}
