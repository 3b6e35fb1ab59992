//! Output sinks.
//!
//! A sink is the destination a channel writes formatted lines to. Emission
//! is best-effort: a console that went away must not fail the caller.

use std::io::Write;
use std::sync::Mutex;

/// Destination for formatted log lines.
///
/// Implementations must serialize concurrent writers internally; channels
/// call in from whatever thread the host is running on.
pub trait LogSink: Send + Sync {
    /// Write one formatted line (without trailing newline).
    fn write_line(&self, line: &str);

    /// Flush any buffered output.
    fn flush(&self);
}

/// Sink writing to standard output.
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stdout().lock().flush();
    }
}

/// Sink capturing lines in memory.
///
/// Used by this crate's own tests; hosts can install one to assert on their
/// log output.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("mutex poisoned").clone()
    }

    /// Drain captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().expect("mutex poisoned"))
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().expect("mutex poisoned").push(line.to_string());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures() {
        let sink = MemorySink::new();
        sink.write_line("one");
        sink.write_line("two");
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.lines().is_empty());
    }
}
