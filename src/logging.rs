//! Logging Setup
//!
//! Installs the rolling logger with the browser console as its sink.

use log::{Level, LevelFilter};
use rolling_logger::{LogLine, Sink};
use wasm_bindgen::JsValue;

/// Records kept for inspection via `rolling_logger::recent()`
const LOG_CAPACITY: usize = 500;

fn console_sink() -> Sink {
    Box::new(|line: &LogLine| {
        let text = JsValue::from_str(&line.to_string());
        match line.level {
            Level::Error => web_sys::console::error_1(&text),
            Level::Warn => web_sys::console::warn_1(&text),
            _ => web_sys::console::log_1(&text),
        }
    })
}

pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = rolling_logger::init_logger(LOG_CAPACITY, level, console_sink()) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
}
