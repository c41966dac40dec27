use log::Log;

use crate::ProgressTracker;

/// Wraps a ProgressTracker and a Log implementor,
/// calling .suspend on the tracker while writing the log message
/// so log lines and the progress bar don't get mixed up on the same line.
pub struct LogWrapper<L: Log> {
    tracker: ProgressTracker,
    log: L,
}

impl<L: Log + 'static> LogWrapper<L> {
    pub fn new(tracker: ProgressTracker, log: L) -> Self {
        Self { tracker, log }
    }

    /// installs this as the global logger,
    ///
    /// tries to find the correct argument to set_max_level
    /// by reading the logger configuration,
    /// you may want to set it manually though.
    pub fn try_init(self) -> Result<(), log::SetLoggerError> {
        log::set_max_level(self.max_level());
        log::set_boxed_logger(Box::new(self))
    }

    pub fn tracker(&self) -> ProgressTracker {
        self.tracker.clone()
    }

    /// The most verbose level the wrapped logger accepts.
    fn max_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        let levels = [Error, Warn, Info, Debug, Trace];

        levels
            .iter()
            .rev()
            .copied()
            .find(|level_filter| {
                level_filter.to_level().is_some_and(|level| {
                    self.enabled(&log::Metadata::builder().level(level).build())
                })
            })
            .unwrap_or(Off)
    }
}

impl<L: Log> Log for LogWrapper<L> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.log.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        self.tracker.suspend(|| self.log.log(record))
    }

    fn flush(&self) {
        self.log.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{DrawTarget, Theme};

    #[derive(Clone, Default)]
    struct Output(Arc<Mutex<String>>);

    impl Write for Output {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().push_str(&String::from_utf8_lossy(buf));
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writes records to the same output as the bar.
    struct LineLogger {
        out: Output,
        level: log::Level,
    }

    impl Log for LineLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= self.level
        }

        fn log(&self, record: &log::Record) {
            let mut out = self.out.clone();
            writeln!(out, "{}", record.args()).unwrap();
        }

        fn flush(&self) {}
    }

    fn wrapper(level: log::Level) -> (LogWrapper<LineLogger>, Output) {
        let out = Output::default();
        let tracker = ProgressTracker::builder(2)
            .width(2)
            .theme(Theme::ascii())
            .draw_target(DrawTarget::writer(out.clone()))
            .build();
        let logger = LineLogger {
            out: out.clone(),
            level,
        };
        (LogWrapper::new(tracker, logger), out)
    }

    #[test]
    fn max_level_follows_inner_logger() {
        assert_eq!(wrapper(log::Level::Info).0.max_level(), log::LevelFilter::Info);
        assert_eq!(wrapper(log::Level::Trace).0.max_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn records_are_printed_between_bars() {
        let (wrapper, out) = wrapper(log::Level::Info);
        wrapper.tracker().advance(1).unwrap();
        out.0.lock().unwrap().clear();

        wrapper.log(
            &log::Record::builder()
                .args(format_args!("hello"))
                .level(log::Level::Info)
                .build(),
        );

        let written = out.0.lock().unwrap().clone();
        let bar = "\r  50% [#-] [0s:0s]            ";
        let blank = format!("\r{}\r", " ".repeat(bar.len() - 1));
        assert_eq!(written, format!("{}hello\n{}", blank, bar));
    }
}
