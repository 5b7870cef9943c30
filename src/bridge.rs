//! Routes the `log` facade macros through the shared logger, so crates
//! that emit via `log::info!` and friends share the same sink, format,
//! and level as direct callers.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::level::Level;
use crate::registry::shared;

struct FacadeBridge;

static BRIDGE: FacadeBridge = FacadeBridge;

fn severity(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        // The facade has no debug/trace distinction we care about.
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl log::Log for FacadeBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        shared().enabled(severity(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // log::Log cannot carry a sink error back to the macro caller.
        let _ = shared().log(severity(record.level()), record.args());
    }

    fn flush(&self) {}
}

/// Registers the shared logger as the `log` facade backend. Fails if
/// another backend was installed first.
pub fn install() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    // Filtering happens against the shared logger's own level.
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
