use std::thread;
use std::time::Duration;

use linebar::{DrawTarget, LogWrapper, ProgressTracker, Theme};

/// Prints log records on their own line, above the bar.
struct Stderr;

impl log::Log for Stderr {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if record.target() == module_path!() {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn main() {
    let tracker = ProgressTracker::builder(120)
        .width(30)
        .theme(Theme::ascii())
        .draw_target(DrawTarget::stderr())
        .build();
    LogWrapper::new(tracker.clone(), Stderr).try_init().unwrap();

    for phase in ["download", "verify", "install"] {
        log::info!("starting {}", phase);
        tracker.reset();
        for _ in 0..120 {
            thread::sleep(Duration::from_millis(10));
            if let Err(err) = tracker.advance(1) {
                log::warn!("{}", err);
            }
        }
    }
    eprintln!();
}
