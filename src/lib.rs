//! Process-wide singleton logger with colorized, leveled, timestamped
//! output on standard error.
//!
//! The shared instance is built lazily on first access, reading its
//! initial level from `RUST_LOG` (unset means debug, the most verbose).
//! Levels accept any descriptor form (integers 0 to 5, numeral strings,
//! names, abbreviations); unrecognized descriptors degrade to
//! [`Level::Error`] instead of failing.
//!
//! # Call styles
//!
//! Through the shared instance:
//!
//! ```no_run
//! let log = sinlog::shared();
//! log.info("Information")?;
//! log.debug("This is a debug message")?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Reconfigured per call site:
//!
//! ```no_run
//! use sinlog::{configure, LogOptions};
//!
//! let log = configure(LogOptions::new().with_level("warn"));
//! log.error("Failed to open file.")?;
//!
//! std::env::set_var("CUSTOM_LOG", "info");
//! let log = configure(LogOptions::new().with_env_name("CUSTOM_LOG"));
//! log.info("level now follows CUSTOM_LOG")?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Or as free functions, including a descriptor-driven form:
//!
//! ```no_run
//! sinlog::warn("low disk space")?;
//! sinlog::log_at("err", "Failed to open file.")?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Components that refuse ambient globals can construct and inject their
//! own [`Logger`] handles; clones share level state.

pub mod bridge;
pub mod level;
pub mod logger;
pub mod registry;

pub use level::{resolve, Level, LevelError, ResolveLevel};
pub use logger::Logger;
pub use registry::{
    configure, debug, error, fatal, info, log_at, resolve_or_current, shared, unknown, warn,
    LogOptions, DEFAULT_ENV_VAR,
};
