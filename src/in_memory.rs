use std::fmt::{Debug, Formatter};
use std::io::Write;
use std::sync::{Arc, Mutex};

use vt100::Parser;

use crate::TermLike;

/// A thin wrapper around [`vt100::Parser`].
///
/// It shows what a user would see on screen after every carriage return overwrite, which makes
/// it handy for testing code that draws progress bars. This is just an [`Arc`] around its
/// internal state, so it can be freely cloned.
#[derive(Debug, Clone)]
pub struct InMemoryTerm {
    state: Arc<Mutex<InMemoryTermState>>,
}

impl InMemoryTerm {
    pub fn new(rows: u16, cols: u16) -> InMemoryTerm {
        assert!(rows > 0, "rows must be > 0");
        assert!(cols > 0, "cols must be > 0");
        InMemoryTerm {
            state: Arc::new(Mutex::new(InMemoryTermState::new(rows, cols))),
        }
    }

    /// The visible screen, one line per row, with trailing blank rows and blanks removed.
    pub fn contents(&self) -> String {
        let state = self.state.lock().unwrap();

        // `Screen::contents` drops the newlines between rows, so rebuild it row by row.
        let mut rows = state
            .parser
            .screen()
            .rows(0, state.width)
            .map(|row| row.trim_end().to_string())
            .collect::<Vec<_>>();

        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }
}

impl TermLike for InMemoryTerm {
    fn write_str(&self, s: &str) -> std::io::Result<()> {
        self.state.lock().unwrap().write_str(s)
    }

    fn flush(&self) -> std::io::Result<()> {
        self.state.lock().unwrap().parser.flush()
    }
}

struct InMemoryTermState {
    width: u16,
    parser: vt100::Parser,
}

impl InMemoryTermState {
    pub(crate) fn new(rows: u16, cols: u16) -> InMemoryTermState {
        InMemoryTermState {
            width: cols,
            parser: Parser::new(rows, cols, 0),
        }
    }

    pub(crate) fn write_str(&mut self, s: &str) -> std::io::Result<()> {
        self.parser.write_all(s.as_bytes())
    }
}

impl Debug for InMemoryTermState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTermState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DrawTarget, ProgressTracker, Theme};

    fn cursor_pos(in_mem: &InMemoryTerm) -> (u16, u16) {
        in_mem
            .state
            .lock()
            .unwrap()
            .parser
            .screen()
            .cursor_position()
    }

    #[test]
    fn carriage_return_overwrites() {
        let in_mem = InMemoryTerm::new(10, 20);
        in_mem.write_str("ABCDEF").unwrap();
        assert_eq!(cursor_pos(&in_mem), (0, 6));

        in_mem.write_str("\rXY").unwrap();
        assert_eq!(in_mem.contents(), "XYCDEF");
        assert_eq!(cursor_pos(&in_mem), (0, 2));
    }

    #[test]
    fn progress_stays_on_one_line() {
        let in_mem = InMemoryTerm::new(10, 80);
        let tracker = ProgressTracker::builder(4)
            .width(8)
            .theme(Theme::ascii())
            .draw_target(DrawTarget::term_like(Box::new(in_mem.clone())))
            .build();

        assert_eq!(in_mem.contents(), String::new());

        tracker.advance(1).unwrap();
        assert_eq!(in_mem.contents(), "  25% [##------] [0s:0s]");

        tracker.advance(3).unwrap();
        assert_eq!(in_mem.contents(), " 100% [########] [0s:0s]");
        assert_eq!(cursor_pos(&in_mem).0, 0);
    }
}
