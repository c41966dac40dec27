use std::fmt;
use std::time::Duration;

/// Wraps an std duration for compact formatting with whole-second precision.
///
/// Sub-second parts are truncated. Larger units are only shown once they are non-zero, but
/// every smaller unit is kept after that, so one hour and three seconds reads `1h0m3s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactDuration(pub Duration);

impl fmt::Display for CompactDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = self.0.as_secs();
        let seconds = t % 60;
        t /= 60;
        let minutes = t % 60;
        let hours = t / 60;
        if hours > 0 {
            write!(f, "{}h{}m{}s", hours, minutes, seconds)
        } else if minutes > 0 {
            write!(f, "{}m{}s", minutes, seconds)
        } else {
            write!(f, "{}s", seconds)
        }
    }
}
