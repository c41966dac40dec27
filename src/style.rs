use std::borrow::Cow;
use std::fmt::Write;
use std::iter::repeat;

use crate::format::CompactDuration;
use crate::state::ProgressState;

/// Blanks left behind by a previous, longer line.
const TRAILING_PAD: &str = "            ";

/// The glyphs a progress bar is drawn with.
///
/// ```text
/// |█████████               |
/// ^    ^            ^      ^
/// |    saucer       |      bar_end
/// bar_start         padding
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Repeated once for every filled cell.
    pub saucer: Cow<'static, str>,
    /// Repeated once for every cell that is not filled yet.
    pub padding: Cow<'static, str>,
    pub bar_start: Cow<'static, str>,
    pub bar_end: Cow<'static, str>,
}

impl Theme {
    pub fn new(
        saucer: impl Into<Cow<'static, str>>,
        padding: impl Into<Cow<'static, str>>,
        bar_start: impl Into<Cow<'static, str>>,
        bar_end: impl Into<Cow<'static, str>>,
    ) -> Theme {
        Theme {
            saucer: saucer.into(),
            padding: padding.into(),
            bar_start: bar_start.into(),
            bar_end: bar_end.into(),
        }
    }

    /// A theme made of plain ASCII, for sinks that can't show block glyphs: `[###-------]`
    pub fn ascii() -> Theme {
        Theme::new("#", "-", "[", "]")
    }

    /// Renders `fill` saucers followed by padding up to `width` cells, between the borders.
    ///
    /// A fill wider than `width` (possible after the count overflowed the maximum) is drawn as a
    /// full bar.
    pub(crate) fn format_bar(&self, fill: usize, width: usize) -> String {
        let fill = fill.min(width);
        let mut bar = String::with_capacity(
            self.bar_start.len()
                + self.bar_end.len()
                + fill * self.saucer.len()
                + width.saturating_sub(fill) * self.padding.len(),
        );
        bar.push_str(&self.bar_start);
        for saucer in repeat(&*self.saucer).take(fill) {
            bar.push_str(saucer);
        }
        for padding in repeat(&*self.padding).take(width.saturating_sub(fill)) {
            bar.push_str(padding);
        }
        bar.push_str(&self.bar_end);
        bar
    }

    /// Formats the full line for `state`, including the leading carriage return and the
    /// trailing blanks.
    pub(crate) fn format_line(&self, state: &ProgressState, width: usize) -> String {
        let mut line = String::new();
        // writing into a String can't fail
        let _ = write!(
            line,
            "\r{:4}% {} [{}:{}]{}",
            state.percent,
            self.format_bar(state.fill_width, width),
            CompactDuration(state.elapsed),
            CompactDuration(state.eta),
            TRAILING_PAD,
        );
        line
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme::new("█", " ", "|", "|")
    }
}
