//! Fixture builders shared by the unit tests.
//!
//! ```rust,ignore
//! use crate::test_utils::{date, entry, sample_ledger};
//!
//! let ledger = sample_ledger().insert(entry(2025, 4, 25, 7_000_000));
//! ```
use crate::domain::{Ledger, SalaryEntry};
use chrono::NaiveDate;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn entry(year: i32, month: u32, day: u32, amount: u64) -> SalaryEntry {
    SalaryEntry::new(date(year, month, day), amount).expect("valid test entry")
}

/// The five historical payments the dashboard ships with.
pub fn sample_ledger() -> Ledger {
    Ledger::from_entries([
        entry(2024, 11, 25, 10_500_000),
        entry(2024, 12, 25, 10_500_000),
        entry(2025, 1, 25, 6_100_000),
        entry(2025, 2, 25, 6_100_000),
        entry(2025, 3, 25, 18_600_000),
    ])
}

/// Records every log line emitted during the test run, so tests can check
/// that something was logged. Lines from concurrently running tests mix in,
/// so match on text unique to the test.
pub struct LogCapture {
    lines: Mutex<Vec<String>>,
}

static CAPTURE: LogCapture = LogCapture {
    lines: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

impl LogCapture {
    /// Install the capturing logger (once per process) and return it.
    pub fn install() -> &'static LogCapture {
        INSTALL.call_once(|| {
            if log::set_logger(&CAPTURE).is_ok() {
                log::set_max_level(LevelFilter::Trace);
            }
        });
        &CAPTURE
    }

    /// Whether a line at `level` containing `needle` has been logged.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        let prefix = format!("{level} ");
        self.lines
            .lock()
            .expect("log capture lock")
            .iter()
            .any(|line| line.starts_with(&prefix) && line.contains(needle))
    }
}

impl Log for LogCapture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}
