//! Message severity levels.

use std::fmt;
use std::str::FromStr;

use colored::{ColoredString, Colorize};

use crate::error::Error;

/// Severity of a log message, least to most severe.
///
/// A message is emitted iff its severity is at or above the channel's
/// configured minimum.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Critical = 5,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Critical,
    ];

    /// Lowercase token used in formatted output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Severity {
        match value {
            0 => Severity::Trace,
            1 => Severity::Debug,
            2 => Severity::Info,
            3 => Severity::Warn,
            4 => Severity::Error,
            _ => Severity::Critical,
        }
    }

    /// Level tag styled for terminal output.
    pub(crate) fn paint(self) -> ColoredString {
        match self {
            Severity::Trace => self.as_str().white(),
            Severity::Debug => self.as_str().cyan(),
            Severity::Info => self.as_str().green(),
            Severity::Warn => self.as_str().yellow().bold(),
            Severity::Error => self.as_str().red().bold(),
            Severity::Critical => self.as_str().white().bold().on_red(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("trace".parse::<Severity>().unwrap(), Severity::Trace);
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert!(matches!(
            "loud".parse::<Severity>(),
            Err(Error::UnknownSeverity(_))
        ));
    }

    #[test]
    fn test_severity_display_roundtrip() {
        for severity in Severity::ALL {
            assert_eq!(
                severity.to_string().parse::<Severity>().unwrap(),
                severity
            );
        }
    }

    #[test]
    fn test_severity_from_u8_saturates() {
        assert_eq!(Severity::from_u8(0), Severity::Trace);
        assert_eq!(Severity::from_u8(5), Severity::Critical);
        assert_eq!(Severity::from_u8(200), Severity::Critical);
    }
}
