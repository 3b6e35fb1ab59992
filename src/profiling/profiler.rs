//! Named timer registry.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

use crate::error::Error;
use crate::logging::{emit_core, Severity};

/// Sentinel returned by [`Profiler::elapsed_us`] for a name with no live
/// start. `-1` cannot be mistaken for a legitimate sub-microsecond reading.
pub const TIMER_NOT_STARTED_US: i64 = -1;

/// Process-wide timer registry, live for the process duration.
pub static GLOBAL_PROFILER: Lazy<Profiler> = Lazy::new(Profiler::new);

/// Registry of named one-shot timers.
///
/// The mutex guards only the map; reporting happens after it is released so
/// emission never contends with other timer operations.
pub struct Profiler {
    starts: Mutex<HashMap<String, Instant>>,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            starts: Mutex::new(HashMap::new()),
        }
    }

    /// Record the current monotonic time under `name`.
    ///
    /// A later `start` with the same name silently overwrites the earlier
    /// unconsumed entry.
    pub fn start(&self, name: &str) {
        let mut starts = self.starts.lock().expect("mutex poisoned");
        starts.insert(name.to_string(), Instant::now());
    }

    /// Consume the entry for `name` and report its elapsed time at `trace`.
    ///
    /// A stop without a matching start warns through `"Core"` and returns
    /// [`Error::TimerNotStarted`].
    pub fn end(&self, name: &str) -> Result<Duration, Error> {
        let start = {
            let mut starts = self.starts.lock().expect("mutex poisoned");
            starts.remove(name)
        };
        let Some(start) = start else {
            emit_core(
                Severity::Warn,
                format_args!("timer '{name}' stopped without a matching start"),
            );
            return Err(Error::TimerNotStarted(name.to_string()));
        };
        let elapsed = start.elapsed();
        emit_core(
            Severity::Trace,
            format_args!("timer '{name}' took {} us", elapsed.as_micros()),
        );
        Ok(elapsed)
    }

    /// Microseconds elapsed since `start(name)`, without consuming the
    /// entry. Returns [`TIMER_NOT_STARTED_US`] for a name with no live
    /// start.
    pub fn elapsed_us(&self, name: &str) -> i64 {
        let starts = self.starts.lock().expect("mutex poisoned");
        match starts.get(name) {
            Some(start) => start.elapsed().as_micros() as i64,
            None => TIMER_NOT_STARTED_US,
        }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Profiler::start`] on the global registry.
pub fn start(name: &str) {
    GLOBAL_PROFILER.start(name);
}

/// [`Profiler::end`] on the global registry.
pub fn end(name: &str) -> Result<Duration, Error> {
    GLOBAL_PROFILER.end(name)
}

/// [`Profiler::elapsed_us`] on the global registry.
pub fn elapsed_us(name: &str) -> i64 {
    GLOBAL_PROFILER.elapsed_us(name)
}
