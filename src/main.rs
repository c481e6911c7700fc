//! Keyprint - keystroke dynamics capture utility
//!
//! Records key press/release timing until the terminator key is released
//! (or Ctrl-C), then writes the keystroke table and session report.

use anyhow::Result;
use keyprint::{
    config::Config,
    engine::Session,
    keyboard::{KeyboardListener, RawKeyEvent},
    report::SessionReport,
    stats::SessionStats,
};
use log::{debug, info};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().unwrap_or_default();
    let terminator = config.capture.terminator;

    println!("Recording keystrokes - release '{}' to stop", terminator);

    let (event_tx, event_rx) = mpsc::channel::<RawKeyEvent>();
    let mut listener = KeyboardListener::new(event_tx);
    let mut session = Session::with_terminator(0.0, terminator);

    // Ctrl-C closes the stream; the session finalizes with whatever
    // completed records it has.
    let running = Arc::new(AtomicBool::new(true));
    let running_flag = running.clone();
    ctrlc::set_handler(move || {
        running_flag.store(false, Ordering::SeqCst);
    })?;

    let poll_interval = config.poll_interval();
    'capture: while running.load(Ordering::SeqCst) {
        listener.poll();
        while let Ok(event) = event_rx.try_recv() {
            if !session.process(&event) {
                debug!("terminator released, ending capture");
                break 'capture;
            }
        }
        thread::sleep(poll_interval);
    }

    let duration_secs = listener.elapsed_secs();
    let records = session.finish();
    if records.is_empty() {
        println!("No completed keystrokes to save");
        return Ok(());
    }

    let report = SessionReport::new(&records, duration_secs);

    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let csv_name = format!("{}_{}.csv", config.output.file_stem, stamp);
    report.export_csv(Path::new(&csv_name))?;
    info!("wrote keystroke table to {}", csv_name);
    println!("Saved {} keystrokes to {}", records.len(), csv_name);

    if config.output.write_json {
        let json_name = format!("{}_{}.json", config.output.file_stem, stamp);
        report.export_json(Path::new(&json_name))?;
        info!("wrote session report to {}", json_name);
    }

    print_summary(&report.stats, duration_secs);
    Ok(())
}

fn print_summary(stats: &SessionStats, duration_secs: f64) {
    println!("\nSession duration: {:.1}s", duration_secs);
    println!("Keystrokes: {}", stats.keystrokes);
    println!("Distinct keys: {}", stats.distinct_keys);

    if stats.hold_time.count > 0 {
        println!("Mean hold time: {:.3} sec", stats.hold_time.mean);
        println!("Shortest hold: {:.3} sec", stats.hold_time.min);
        println!("Longest hold: {:.3} sec", stats.hold_time.max);
    }

    if !stats.key_counts.is_empty() {
        println!("\nKeys pressed:");
        for (key, count) in &stats.key_counts {
            println!("  {}: {} time(s)", key, count);
        }
    }
}
