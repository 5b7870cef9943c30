use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub(crate) const RESET: &str = "\x1b[0m";

/// Canonical severity rank. `Debug` is the most verbose; `Unknown` is the
/// highest rank, so a logger set to `Unknown` emits nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Unknown = 5,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Unknown => "unknown",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Unknown => "UNKNOWN",
        }
    }

    pub(crate) fn color(self) -> &'static str {
        match self {
            Level::Debug => "\x1b[34m",
            Level::Info => "\x1b[36m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
            Level::Fatal => "\x1b[35m",
            Level::Unknown => RESET,
        }
    }

    pub(crate) fn from_index(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Debug),
            1 => Some(Level::Info),
            2 => Some(Level::Warn),
            3 => Some(Level::Error),
            4 => Some(Level::Fatal),
            5 => Some(Level::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strict string parsing. Accepts numerals "0".."5", canonical names and
/// the recognized abbreviations, ASCII case-insensitively. Most callers
/// want [`resolve`] instead, which never fails.
impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only bare digits count as a numeral; u8::from_str would also
        // take a leading '+'.
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u8>()
                .ok()
                .and_then(Level::from_index)
                .ok_or_else(|| LevelError::Unrecognized(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "debug" | "dbg" => Ok(Level::Debug),
            "info" | "information" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "err" | "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "unk" | "unknown" => Ok(Level::Unknown),
            other => Err(LevelError::Unrecognized(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum LevelError {
    Unrecognized(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Unrecognized(descriptor) => {
                write!(f, "unrecognized log level descriptor \"{descriptor}\"")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// A level descriptor: any external representation of a [`Level`].
///
/// Resolution is total. Anything that does not name a level (an empty
/// string, an out-of-range integer, a float) degrades to [`Level::Error`]
/// rather than failing, so a misconfigured level can never crash logging.
pub trait ResolveLevel {
    fn resolve_level(self) -> Level;
}

impl ResolveLevel for Level {
    fn resolve_level(self) -> Level {
        self
    }
}

impl ResolveLevel for &str {
    fn resolve_level(self) -> Level {
        Level::from_str(self).unwrap_or(Level::Error)
    }
}

impl ResolveLevel for String {
    fn resolve_level(self) -> Level {
        self.as_str().resolve_level()
    }
}

impl ResolveLevel for &String {
    fn resolve_level(self) -> Level {
        self.as_str().resolve_level()
    }
}

impl<'a> ResolveLevel for Cow<'a, str> {
    fn resolve_level(self) -> Level {
        self.as_ref().resolve_level()
    }
}

macro_rules! impl_int_descriptor {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ResolveLevel for $ty {
                fn resolve_level(self) -> Level {
                    u8::try_from(self)
                        .ok()
                        .and_then(Level::from_index)
                        .unwrap_or(Level::Error)
                }
            }
        )*
    };
}

impl_int_descriptor!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Floats never name a level; they degrade like any other unrecognized shape.
impl ResolveLevel for f32 {
    fn resolve_level(self) -> Level {
        Level::Error
    }
}

impl ResolveLevel for f64 {
    fn resolve_level(self) -> Level {
        Level::Error
    }
}

/// Normalizes any level descriptor to a canonical [`Level`].
pub fn resolve(descriptor: impl ResolveLevel) -> Level {
    descriptor.resolve_level()
}
