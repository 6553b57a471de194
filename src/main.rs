//! Gopher Runner entry point
//!
//! Headless driver: stands in for the host window by mapping wall-clock time
//! to simulation ticks and printing a JSON snapshot once per second.
//!
//! Usage: `gopher-runner [tuning.json] [seconds]`

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use gopher_runner::consts::TICKS_PER_SECOND;
use gopher_runner::{Session, Tuning, ticks_since};

/// Frame pacing for the headless loop (~60 fps)
const FRAME_TIME: Duration = Duration::from_millis(16);
/// Warn when one frame has to catch up more than this many ticks
const CATCH_UP_WARN_TICKS: u64 = 10;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path).with_context(|| format!("loading tuning from {path}"))?,
        None => Tuning::default(),
    };
    let seconds: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid run length `{s}`"))?,
        None => 5,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before Unix epoch")?
        .as_nanos() as u64;
    log::info!("Gopher Runner (headless) starting with seed: {}", seed);

    let mut session = Session::new(tuning, seed)?;
    let start_time = Instant::now();
    session.start(ticks_since(start_time.elapsed()));

    let end_tick = seconds * TICKS_PER_SECOND;
    let mut last_tick = 0;
    let mut next_report = 0;
    loop {
        let now = ticks_since(start_time.elapsed());
        if now.saturating_sub(last_tick) > CATCH_UP_WARN_TICKS {
            log::warn!("Frame catching up {} ticks", now - last_tick);
        }
        last_tick = now;

        if let Some(snapshot) = session.frame(now) {
            if now >= next_report {
                println!("{}", serde_json::to_string(&snapshot)?);
                next_report = now + TICKS_PER_SECOND;
            }
        }

        if now >= end_tick {
            break;
        }
        std::thread::sleep(FRAME_TIME);
    }

    session.stop();
    Ok(())
}
