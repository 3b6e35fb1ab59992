//! RAII scope timing.

use std::time::Instant;

use crate::logging::{emit_core, Severity};

/// Measures its own lifetime and reports it at `trace` via `"Core"`.
///
/// Reporting happens in `Drop`, so every exit path is covered, including
/// early return and unwind from a panic. Each instance carries its
/// own start time and never touches the timer registry, so overlapping
/// scopes with the same name cannot collide. Not `Clone`: a copy would
/// report the same interval twice.
pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let us = self.start.elapsed().as_micros();
        emit_core(
            Severity::Trace,
            format_args!("scope '{}' took {} us", self.name, us),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_scoped_timer_measures_scope() {
        let timer = ScopedTimer::new("scope");
        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(timer.name(), "scope");
        drop(timer);
    }
}
