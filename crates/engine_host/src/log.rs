//! Engine log levels.

/// Severity of a message forwarded to the engine logger.
///
/// The discriminants are the bit values the engine logger expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum LogLevel {
    Trace = 1 << 0,
    Debug = 1 << 1,
    Info = 1 << 2,
    Warn = 1 << 3,
    Error = 1 << 4,
    Critical = 1 << 5,
}

impl LogLevel {
    /// Returns the engine bit value for this level.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bits() {
        assert_eq!(LogLevel::Trace.bits(), 1);
        assert_eq!(LogLevel::Info.bits(), 4);
        assert_eq!(LogLevel::Critical.bits(), 32);
    }

    #[test]
    fn test_levels_are_ordered_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Warn);
        assert!(LogLevel::Error < LogLevel::Critical);
    }
}
