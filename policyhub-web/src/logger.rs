//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{level}] {target}: {message}")
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    match level {
        Level::Error => crate::dom::console_error(line),
        Level::Warn => crate::dom::console_warn(line),
        Level::Info | Level::Debug | Level::Trace => crate::dom::console_log(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Default verbosity: debug builds log state changes, release builds only warnings.
#[must_use]
pub const fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
