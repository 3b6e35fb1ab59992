//! Log channels.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use chrono::Local;
use colored::Color;

use super::pattern::LinePattern;
use super::severity::Severity;
use super::sink::LogSink;

/// Construction-time description of one channel.
#[derive(Debug, Clone)]
pub struct ChannelSpec {
    /// Unique channel name, e.g. `"Core"`.
    pub name: String,
    /// Color of the channel-name segment in formatted output.
    pub name_color: Color,
}

impl ChannelSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_color: Color::BrightBlack,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.name_color = color;
        self
    }
}

/// A named logical output stream with its own severity filter.
///
/// Channels are created by the registry at init and only referenced by name
/// afterward; the handles the registry hands out are `Arc`-backed references
/// to the single owned instance. The level is atomic so `set_level` never
/// contends with emission.
pub struct Channel {
    name: String,
    level: AtomicU8,
    pattern: LinePattern,
    name_color: Color,
    ansi: bool,
    sink: Arc<dyn LogSink>,
}

impl Channel {
    pub(crate) fn new(
        spec: &ChannelSpec,
        level: Severity,
        pattern: LinePattern,
        ansi: bool,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            name: spec.name.clone(),
            level: AtomicU8::new(level as u8),
            pattern,
            name_color: spec.name_color,
            ansi,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current minimum severity.
    pub fn level(&self) -> Severity {
        Severity::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub(crate) fn set_level(&self, level: Severity) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a message at `severity` would be emitted.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /// Format and emit one message, subject to the level filter.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let message = fmt::format(args);
        let line = self.pattern.render(
            &Local::now(),
            severity,
            &self.name,
            self.name_color,
            self.ansi,
            &message,
        );
        self.sink.write_line(&line);
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Trace, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Critical, args);
    }

    /// Flush the underlying sink.
    pub fn flush(&self) {
        self.sink.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::sink::MemorySink;

    fn test_channel(sink: Arc<MemorySink>) -> Channel {
        Channel::new(
            &ChannelSpec::new("Test"),
            Severity::Trace,
            LinePattern::default(),
            false,
            sink,
        )
    }

    #[test]
    fn test_channel_spec_color_override() {
        let spec = ChannelSpec::new("Net").with_color(Color::Cyan);
        assert_eq!(spec.name, "Net");
        assert_eq!(spec.name_color, Color::Cyan);
    }

    #[test]
    fn test_level_filter() {
        let sink = Arc::new(MemorySink::new());
        let channel = test_channel(sink.clone());

        channel.set_level(Severity::Warn);
        assert!(!channel.enabled(Severity::Info));
        assert!(channel.enabled(Severity::Warn));
        assert!(channel.enabled(Severity::Critical));

        channel.info(format_args!("hidden"));
        channel.warn(format_args!("shown"));
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("shown"));
    }

    #[test]
    fn test_all_severities_emit_at_trace() {
        let sink = Arc::new(MemorySink::new());
        let channel = test_channel(sink.clone());
        for severity in Severity::ALL {
            channel.log(severity, format_args!("message"));
        }
        assert_eq!(sink.lines().len(), Severity::ALL.len());
    }
}
