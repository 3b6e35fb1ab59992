//! Crate error types.

use thiserror::Error;

/// Errors reported by the logging and profiling layer.
///
/// Every variant is non-fatal: the layer reports the condition through the
/// `"Core"` channel (when one is installed) and hands the caller an explicit
/// `Err` instead of a dead handle or a silent no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Requested channel name is not present in the registry.
    #[error("log channel '{0}' is not registered")]
    ChannelNotFound(String),

    /// A timer was stopped without a matching start.
    #[error("timer '{0}' has no matching start")]
    TimerNotStarted(String),

    /// A line pattern template contained an unknown `%` directive.
    #[error("unrecognized pattern directive '%{0}'")]
    PatternDirective(char),

    /// A severity string did not match any known level.
    #[error("unrecognized severity '{0}'")]
    UnknownSeverity(String),
}
