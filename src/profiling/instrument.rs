//! Timed invocation of arbitrary operations.

use std::time::Instant;

use crate::logging::{emit_core, Severity};

fn report(name: &str, us: u128, failed: bool) {
    if failed {
        emit_core(
            Severity::Trace,
            format_args!("call '{name}' failed after {us} us"),
        );
    } else {
        emit_core(Severity::Trace, format_args!("call '{name}' took {us} us"));
    }
}

/// Invoke `op` exactly once, report its duration at `trace`, and return its
/// value unchanged. Covers unit-returning operations through `T = ()`.
pub fn time_call<T, F>(name: &str, op: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = op();
    report(name, start.elapsed().as_micros(), false);
    value
}

/// Invoke a fallible `op` exactly once and forward its `Result` unchanged.
///
/// Both branches are timed; an `Err` is annotated as a failure but never
/// altered or swallowed.
pub fn time_fallible<T, E, F>(name: &str, op: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let result = op();
    report(name, start.elapsed().as_micros(), result.is_err());
    result
}
