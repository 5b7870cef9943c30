use std::fmt::Display;
use std::io;
use std::sync::LazyLock;

use crate::level::{resolve, Level, ResolveLevel};
use crate::logger::Logger;

/// Environment variable consulted when the shared logger is first built
/// and whenever [`configure`] is called without an explicit variable name.
pub const DEFAULT_ENV_VAR: &str = "RUST_LOG";

static SHARED: LazyLock<Logger> = LazyLock::new(|| {
    let logger = Logger::new();
    logger.set_level_from_env(DEFAULT_ENV_VAR);
    logger
});

// Tests that touch process-global state (the shared level, environment
// variables, the log facade backend) serialize on this guard.
#[cfg(test)]
pub(crate) static TEST_GUARD: LazyLock<std::sync::Mutex<()>> =
    LazyLock::new(|| std::sync::Mutex::new(()));

/// Returns the process-wide logger, constructing it on first access.
///
/// Construction happens exactly once; later calls return the same
/// instance, so a level change is observed by every holder of the handle.
pub fn shared() -> &'static Logger {
    &SHARED
}

/// Options for [`configure`]. An explicit level always wins over an
/// environment variable supplied in the same call.
///
/// ```no_run
/// use sinlog::{configure, LogOptions};
///
/// configure(LogOptions::new().with_level("warn"));
/// configure(LogOptions::new().with_env_name("MYAPP_LOG"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    level: Option<Level>,
    env_name: Option<String>,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests an explicit level. The descriptor is normalized through
    /// the resolver, so unrecognized values degrade to [`Level::Error`].
    pub fn with_level(mut self, level: impl ResolveLevel) -> Self {
        self.level = Some(level.resolve_level());
        self
    }

    /// Requests a re-read of the named environment variable. Ignored when
    /// an explicit level is present in the same options.
    pub fn with_env_name(mut self, name: impl Into<String>) -> Self {
        self.env_name = Some(name.into());
        self
    }
}

/// Reconfigures the shared logger and returns it.
///
/// The singleton is created if this is the first access; it is never
/// recreated. With an explicit level the environment is not consulted at
/// all; with only an environment name that variable is read and resolved
/// (absent counts as "debug"); with neither, the logger is returned as
/// currently configured.
pub fn configure(options: LogOptions) -> &'static Logger {
    let logger = shared();
    if let Some(level) = options.level {
        logger.set_level(level);
        return logger;
    }
    if let Some(name) = options.env_name.as_deref() {
        logger.set_level_from_env(name);
    }
    logger
}

/// Resolves a descriptor, falling back to the shared logger's current
/// level when the descriptor is absent. The fallback initializes the
/// shared logger first if needed, since "current level" presupposes one.
pub fn resolve_or_current(descriptor: Option<impl ResolveLevel>) -> Level {
    match descriptor {
        Some(descriptor) => resolve(descriptor),
        None => shared().level(),
    }
}

/// Logs `message` on the shared logger at the level named by any
/// descriptor form.
pub fn log_at(level: impl ResolveLevel, message: impl Display) -> io::Result<()> {
    shared().log(level.resolve_level(), message)
}

pub fn debug(message: impl Display) -> io::Result<()> {
    shared().debug(message)
}

pub fn info(message: impl Display) -> io::Result<()> {
    shared().info(message)
}

pub fn warn(message: impl Display) -> io::Result<()> {
    shared().warn(message)
}

pub fn error(message: impl Display) -> io::Result<()> {
    shared().error(message)
}

pub fn fatal(message: impl Display) -> io::Result<()> {
    shared().fatal(message)
}

pub fn unknown(message: impl Display) -> io::Result<()> {
    shared().unknown(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_returns_one_instance() {
        let _guard = TEST_GUARD.lock().unwrap();
        let first = shared();
        let second = shared();
        assert!(std::ptr::eq(first, second));

        first.set_level("fatal");
        assert_eq!(second.level(), Level::Fatal);
    }

    #[test]
    fn configure_with_nothing_leaves_the_level_alone() {
        let _guard = TEST_GUARD.lock().unwrap();
        configure(LogOptions::new().with_level("warn"));
        let logger = configure(LogOptions::new());
        assert_eq!(logger.level(), Level::Warn);
    }

    #[test]
    fn explicit_level_wins_over_env_name() {
        let _guard = TEST_GUARD.lock().unwrap();
        std::env::set_var("SINLOG_TEST_PRECEDENCE", "info");
        let logger = configure(
            LogOptions::new()
                .with_level("error")
                .with_env_name("SINLOG_TEST_PRECEDENCE"),
        );
        assert_eq!(logger.level(), Level::Error);
        std::env::remove_var("SINLOG_TEST_PRECEDENCE");
    }

    #[test]
    fn env_name_applies_when_no_level_is_given() {
        let _guard = TEST_GUARD.lock().unwrap();
        std::env::set_var("SINLOG_TEST_LEVEL", "INFO");
        let logger = configure(LogOptions::new().with_env_name("SINLOG_TEST_LEVEL"));
        assert_eq!(logger.level(), Level::Info);
        assert!(!logger.enabled(Level::Debug));
        assert!(logger.enabled(Level::Info));
        std::env::remove_var("SINLOG_TEST_LEVEL");
    }

    #[test]
    fn unrecognized_env_value_degrades_to_error() {
        let _guard = TEST_GUARD.lock().unwrap();
        std::env::set_var("SINLOG_TEST_GARBAGE", "⚠️");
        let logger = configure(LogOptions::new().with_env_name("SINLOG_TEST_GARBAGE"));
        assert_eq!(logger.level(), Level::Error);
        assert!(!logger.enabled(Level::Warn));
        assert!(logger.enabled(Level::Error));
        assert!(logger.enabled(Level::Fatal));
        std::env::remove_var("SINLOG_TEST_GARBAGE");
    }

    #[test]
    fn absent_env_variable_counts_as_debug() {
        let _guard = TEST_GUARD.lock().unwrap();
        std::env::remove_var("SINLOG_TEST_UNSET");
        configure(LogOptions::new().with_level("fatal"));
        let logger = configure(LogOptions::new().with_env_name("SINLOG_TEST_UNSET"));
        assert_eq!(logger.level(), Level::Debug);
        assert!(logger.debug("first access emits at debug").is_ok());
    }

    #[test]
    fn resolve_or_current_reads_the_shared_level_when_absent() {
        let _guard = TEST_GUARD.lock().unwrap();
        configure(LogOptions::new().with_level("warn"));
        assert_eq!(resolve_or_current(None::<Level>), Level::Warn);
        assert_eq!(resolve_or_current(Some("fatal")), Level::Fatal);
        // An explicit resolution does not touch the shared state.
        assert_eq!(shared().level(), Level::Warn);
    }

    #[test]
    fn free_functions_forward_to_the_shared_logger() {
        let _guard = TEST_GUARD.lock().unwrap();
        configure(LogOptions::new().with_level("warn"));
        assert!(log_at("err", "via descriptor").is_ok());
        assert!(warn("warn after the cutoff").is_ok());
        assert!(debug("suppressed but still Ok").is_ok());
    }
}
