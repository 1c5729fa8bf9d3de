//! Captures log lines so tests can assert on them.

use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

struct Capture(Mutex<Vec<String>>);

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.0.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

pub fn init() {
    // Every test calls this; only the first install wins.
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Debug);
}

pub fn contains(line: &str) -> bool {
    CAPTURE.0.lock().map(|lines| lines.iter().any(|l| l == line)).unwrap_or(false)
}
