//! linebar is a small, thread-safe progress bar for command line programs that perform a known
//! amount of countable work. It draws a single line that is overwritten in place:
//!
//! ```text
//!   42% |████████████████                        | [12s:16s]
//! ```
//!
//! The line shows the whole percentage, the bar, the elapsed time and a linear estimate of the
//! time remaining. It is only redrawn when the whole percentage changes, so advancing the bar
//! in small steps from a hot loop is cheap.
//!
//! # Usage
//!
//! ```rust,no_run
//! use linebar::ProgressTracker;
//!
//! # fn main() -> linebar::Result<()> {
//! let tracker = ProgressTracker::new(1000);
//! for _ in 0..1000 {
//!     // ...
//!     tracker.advance(1)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A tracker is cheap to clone and clones share the same count, so it can be handed to worker
//! threads that each report their own completions.
//!
//! # Configuration
//!
//! [`ProgressTracker::builder`] returns a [`TrackerBuilder`] to change the bar width, the
//! [`Theme`] glyphs, the [`DrawTarget`] and whether a 0% bar is drawn right away:
//!
//! ```rust,no_run
//! use linebar::{DrawTarget, ProgressTracker, Theme};
//!
//! let tracker = ProgressTracker::builder(64)
//!     .width(20)
//!     .theme(Theme::ascii())
//!     .draw_target(DrawTarget::stderr())
//!     .render_blank_on_create(true)
//!     .build();
//! # let _ = tracker;
//! ```
//!
//! # Errors
//!
//! Advancing past the maximum is reported as [`ProgressError::MaximumExceeded`] but is not
//! rolled back: the tracker keeps the over-limit count and skips drawing for that call. See
//! [`ProgressTracker::advance`] for the full list.
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a logger
//! itself. [`LogWrapper`] routes another logger's output around the bar.

mod builder;
mod draw_target;
mod error;
mod format;
#[cfg(feature = "in_memory")]
mod in_memory;
mod log;
mod progress_tracker;
mod state;
mod style;
mod term_like;

pub use crate::builder::TrackerBuilder;
pub use crate::draw_target::DrawTarget;
pub use crate::error::{ProgressError, Result};
pub use crate::format::CompactDuration;
#[cfg(feature = "in_memory")]
pub use crate::in_memory::InMemoryTerm;
pub use crate::log::LogWrapper;
pub use crate::progress_tracker::ProgressTracker;
pub use crate::state::ProgressState;
pub use crate::style::Theme;
pub use crate::term_like::TermLike;
