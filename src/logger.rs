use std::fmt::Display;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use chrono::Local;

use crate::level::{Level, ResolveLevel, RESET};

const TAG_COLOR: &str = "\x1b[32m";

/// A handle to one logger instance.
///
/// Cloning is cheap and every clone shares the same state, so a `Logger`
/// can be handed to each component from a composition root; a level change
/// through any clone is observed by all of them. The process-wide instance
/// lives in [`crate::registry`], but nothing stops an application from
/// constructing private instances instead.
///
/// Each emitted line looks like:
///
/// ```text
/// [INFO] 21:29:22.004 <app> starting up
/// ```
///
/// with the severity colorized per level and the optional tag in green.
/// All output goes to standard error.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    tag: Option<String>,
    level: AtomicU8,
}

impl Logger {
    /// Creates an untagged logger at the most verbose level.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a logger whose lines carry a bracketed component tag.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self::build(Some(tag.into()))
    }

    fn build(tag: Option<String>) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                tag,
                level: AtomicU8::new(Level::Debug as u8),
            }),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.inner.tag.as_deref()
    }

    pub fn level(&self) -> Level {
        // The stored value is always canonical; saturate anyway.
        Level::from_index(self.inner.level.load(Ordering::SeqCst)).unwrap_or(Level::Unknown)
    }

    /// Sets the level from any descriptor. Unrecognized descriptors degrade
    /// to [`Level::Error`] per the resolver contract.
    pub fn set_level(&self, level: impl ResolveLevel) {
        self.inner
            .level
            .store(level.resolve_level() as u8, Ordering::SeqCst);
    }

    /// Sets the level from the named environment variable. The value is
    /// lowercased before resolution; an absent variable counts as "debug",
    /// so a fresh environment gets the most verbose level rather than the
    /// resolver's `Error` fallback.
    pub fn set_level_from_env(&self, env_name: &str) {
        let value = std::env::var(env_name)
            .map(|value| value.to_lowercase())
            .unwrap_or_else(|_| String::from("debug"));
        self.set_level(value);
    }

    /// Whether a message at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Formats and writes `message` at `level`. Suppressed messages return
    /// `Ok(())`; a failed stderr write propagates to the caller.
    pub fn log(&self, level: Level, message: impl Display) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let line = self.format_line(level, &message);
        let stderr = io::stderr();
        let mut sink = stderr.lock();
        sink.write_all(line.as_bytes())
    }

    pub fn debug(&self, message: impl Display) -> io::Result<()> {
        self.log(Level::Debug, message)
    }

    pub fn info(&self, message: impl Display) -> io::Result<()> {
        self.log(Level::Info, message)
    }

    pub fn warn(&self, message: impl Display) -> io::Result<()> {
        self.log(Level::Warn, message)
    }

    pub fn error(&self, message: impl Display) -> io::Result<()> {
        self.log(Level::Error, message)
    }

    pub fn fatal(&self, message: impl Display) -> io::Result<()> {
        self.log(Level::Fatal, message)
    }

    pub fn unknown(&self, message: impl Display) -> io::Result<()> {
        self.log(Level::Unknown, message)
    }

    fn format_line(&self, level: Level, message: &dyn Display) -> String {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        let tag = match self.inner.tag.as_deref() {
            Some(tag) if !tag.is_empty() => format!("<{TAG_COLOR}{tag}{RESET}> "),
            _ => String::new(),
        };
        format!(
            "[{}{}{RESET}] {timestamp} {tag}{message}\n",
            level.color(),
            level.label()
        )
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_logger_starts_most_verbose() {
        let logger = Logger::new();
        assert_eq!(logger.level(), Level::Debug);
        assert_eq!(logger.tag(), None);
    }

    #[test]
    fn set_level_accepts_any_descriptor_form() {
        let logger = Logger::new();
        logger.set_level("warn");
        assert_eq!(logger.level(), Level::Warn);
        logger.set_level(4);
        assert_eq!(logger.level(), Level::Fatal);
        logger.set_level(Level::Info);
        assert_eq!(logger.level(), Level::Info);
        logger.set_level("nonsense");
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn enabled_filters_below_the_current_level() {
        let logger = Logger::new();
        logger.set_level("warn");
        assert!(!logger.enabled(Level::Debug));
        assert!(!logger.enabled(Level::Info));
        assert!(logger.enabled(Level::Warn));
        assert!(logger.enabled(Level::Error));
        assert!(logger.enabled(Level::Fatal));
        assert!(logger.enabled(Level::Unknown));
    }

    #[test]
    fn clones_share_state() {
        let logger = Logger::with_tag("worker");
        let clone = logger.clone();
        clone.set_level("fatal");
        assert_eq!(logger.level(), Level::Fatal);
        assert_eq!(clone.tag(), Some("worker"));
    }

    #[test]
    fn format_line_carries_severity_color_and_tag() {
        let logger = Logger::with_tag("app");
        let line = logger.format_line(Level::Info, &"hello");
        assert!(line.starts_with("[\x1b[36mINFO\x1b[0m] "));
        assert!(line.contains("<\x1b[32mapp\x1b[0m> hello"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn format_line_omits_empty_tags() {
        let untagged = Logger::new();
        let line = untagged.format_line(Level::Error, &"boom");
        assert!(line.starts_with("[\x1b[31mERROR\x1b[0m] "));
        assert!(line.ends_with(" boom\n"));
        assert!(!line.contains('<'));

        let blank = Logger::with_tag("");
        let line = blank.format_line(Level::Warn, &"msg");
        assert!(!line.contains('<'));
    }

    #[test]
    fn suppressed_writes_still_succeed() {
        let logger = Logger::new();
        logger.set_level("unknown");
        assert!(logger.debug("dropped").is_ok());
        assert!(logger.fatal("dropped too").is_ok());
    }
}
