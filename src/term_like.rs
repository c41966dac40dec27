use std::fmt::Debug;
use std::io;

use console::Term;

/// A trait for minimal terminal-like behavior.
///
/// Anything that implements this trait can be used as a draw target via [`DrawTarget::term_like`].
/// A tracker only ever writes whole lines that start with a carriage return, so nothing beyond
/// plain writes is required.
///
/// [`DrawTarget::term_like`]: crate::DrawTarget::term_like
pub trait TermLike: Debug + Send + Sync {
    /// Write a string
    fn write_str(&self, s: &str) -> io::Result<()>;

    fn flush(&self) -> io::Result<()>;
}

impl TermLike for Term {
    fn write_str(&self, s: &str) -> io::Result<()> {
        self.write_str(s)
    }

    fn flush(&self) -> io::Result<()> {
        self.flush()
    }
}
