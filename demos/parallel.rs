use std::thread;
use std::time::Duration;

use linebar::ProgressTracker;

fn main() -> linebar::Result<()> {
    const JOBS: u64 = 400;
    const WORKERS: u64 = 8;

    let tracker = ProgressTracker::builder(JOBS)
        .render_blank_on_create(true)
        .build();

    thread::scope(|s| {
        let handles: Vec<_> = (0..WORKERS)
            .map(|worker| {
                let tracker = tracker.clone();
                s.spawn(move || -> linebar::Result<()> {
                    for _ in 0..JOBS / WORKERS {
                        thread::sleep(Duration::from_millis(5 + worker * 2));
                        tracker.advance(1)?;
                    }
                    Ok(())
                })
            })
            .collect();

        handles
            .into_iter()
            .try_for_each(|handle| handle.join().expect("worker panicked"))
    })?;

    println!();
    Ok(())
}
