// src/log.rs
//
// Append-only debug log shared by the GUI and the CLI.
// Lines look like `[00:00:01.234][INFO] Save: 3 name(s) → reports/...`.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

use crate::config::consts::{LOG_DIR, LOG_FILE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        })
    }
}

struct Sink {
    path: PathBuf,
    started: Instant,
    // serializes appends from the GUI and test threads
    lock: Mutex<()>,
}

static SINK: OnceLock<Sink> = OnceLock::new();

/// Point the log at `<root>/.attendance/debug.log`.
/// The first call wins; the clock starts there too.
pub fn init(root: &Path) {
    SINK.get_or_init(|| {
        let dir = root.join(LOG_DIR);
        let _ = fs::create_dir_all(&dir);
        Sink { path: dir.join(LOG_FILE), started: Instant::now(), lock: Mutex::new(()) }
    });
}

fn stamp(elapsed: Duration) -> String {
    let ms = elapsed.as_millis() as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

/// Used by the macros. Silently drops the line before `init` or when the
/// file cannot be opened.
pub fn write_log(level: Level, msg: &str) {
    let Some(sink) = SINK.get() else { return };
    let line = format!("[{}][{level}] {msg}\n", stamp(sink.started.elapsed()));

    let Ok(_guard) = sink.lock.lock() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&sink.path) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
