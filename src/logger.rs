// In-app logger: mirrors log records to stderr and keeps a bounded buffer
// for the logs window, with level info per entry.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

const MAX_LOG_LINES: usize = 2000;

lazy_static! {
    static ref LOGS: Mutex<VecDeque<LogEntry>> = Mutex::new(VecDeque::new());
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct UiLogger;

impl Log for UiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match log::max_level().to_level() {
            Some(max) => metadata.level() <= max,
            None => false,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "[{:>5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );

        push_entry(LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

fn push_entry(entry: LogEntry) {
    if let Ok(mut buf) = LOGS.lock() {
        buf.push_back(entry);
        if buf.len() > MAX_LOG_LINES {
            buf.pop_front();
        }
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?.to_lowercase();
    ["trace", "debug", "info", "warn", "error", "off"]
        .into_iter()
        .find(|name| val.contains(name))
        .and_then(|name| name.parse().ok())
}

/// Installs the logger and a panic hook routing panics through it.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(UiLogger));
    log::set_max_level(level_from_env().unwrap_or(LevelFilter::Info));

    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        log::error!("panic at {loc}: {msg}");
    }));

    log::info!("logger initialized at level {}", log::max_level());
}

pub fn len() -> usize {
    LOGS.lock().map(|buf| buf.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut buf) = LOGS.lock() {
        buf.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Visits the entries in `start..end` (indices clamped to the buffer).
pub fn for_each_range<F: FnMut(&LogEntry)>(start: usize, end: usize, mut f: F) {
    if let Ok(buf) = LOGS.lock() {
        let len = buf.len();
        for idx in start.min(len)..end.min(len) {
            if let Some(entry) = buf.get(idx) {
                f(entry);
            }
        }
    }
}

/// All entries as preformatted lines (used by the Copy button).
pub fn all_lines() -> Vec<String> {
    LOGS.lock()
        .map(|buf| {
            buf.iter()
                .map(|e| format!("[{:>5}] {}: {}", e.level, e.target, e.msg))
                .collect()
        })
        .unwrap_or_default()
}

/// Returns true if new entries arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}
