//! Console Logger
//!
//! `log` backend that writes to the browser devtools console.
//! Records carry a bracketed target prefix, e.g. `[DND] drop card=...`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

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
        let line = JsValue::from(format_record(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `taskflow_ui::pages::board_view` -> `[BOARD_VIEW] msg`
fn format_record(target: &str, message: &str) -> String {
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short.to_uppercase(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_uses_last_path_segment() {
        assert_eq!(format_record("taskflow_ui::moves", "drop"), "[MOVES] drop");
        assert_eq!(format_record("DND", "start"), "[DND] start");
    }
}
