//! Channel registry and process-wide installation.
//!
//! The registry is an explicitly constructed value; [`init`] installs one
//! process-wide for the macro facade and returns a [`LoggingGuard`] that
//! shuts logging down when dropped.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::channel::Channel;
use super::config::{LogConfig, CORE_CHANNEL};
use super::pattern::LinePattern;
use super::severity::Severity;
use super::sink::{LogSink, StdoutSink};
use crate::error::Error;

/// Process-wide registry slot. Empty until [`init`], empty again after
/// [`shutdown`].
static GLOBAL: Lazy<RwLock<Option<Arc<LogRegistry>>>> = Lazy::new(|| RwLock::new(None));

/// Owner of all log channels.
///
/// The channel map is fixed at construction; only the per-channel levels
/// change afterward, so lookups never take a lock.
pub struct LogRegistry {
    channels: HashMap<String, Arc<Channel>>,
    sink: Arc<dyn LogSink>,
}

impl LogRegistry {
    /// Build a registry writing to standard output.
    pub fn new(config: &LogConfig) -> Result<Self, Error> {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    /// Build a registry writing to the given sink.
    pub fn with_sink(config: &LogConfig, sink: Arc<dyn LogSink>) -> Result<Self, Error> {
        let pattern = LinePattern::parse(&config.pattern)?;

        let mut channels = HashMap::new();
        for spec in &config.channels {
            let channel = Channel::new(
                spec,
                config.default_level,
                pattern.clone(),
                config.ansi_colors,
                sink.clone(),
            );
            channels.insert(spec.name.clone(), Arc::new(channel));
        }

        let registry = Self { channels, sink };
        registry.core_log(Severity::Info, format_args!("logging initialized"));
        for (name, level) in &config.directives {
            let _ = registry.set_level(name, *level);
        }
        Ok(registry)
    }

    /// Look up a channel, reporting unknown names through `"Core"`.
    pub fn get(&self, name: &str) -> Result<&Arc<Channel>, Error> {
        match self.channels.get(name) {
            Some(channel) => Ok(channel),
            None => {
                self.core_log(
                    Severity::Error,
                    format_args!("log channel '{name}' not found"),
                );
                Err(Error::ChannelNotFound(name.to_string()))
            }
        }
    }

    /// Quiet lookup: no error report for unknown names.
    pub fn channel(&self, name: &str) -> Option<&Arc<Channel>> {
        self.channels.get(name)
    }

    /// Apply a minimum severity to every channel.
    pub fn set_level_all(&self, level: Severity) {
        for channel in self.channels.values() {
            channel.set_level(level);
        }
        self.core_log(Severity::Info, format_args!("log level set to {level}"));
    }

    /// Apply a minimum severity to one channel.
    ///
    /// Unknown names are reported through `"Core"` and mutate nothing.
    pub fn set_level(&self, name: &str, level: Severity) -> Result<(), Error> {
        match self.channels.get(name) {
            Some(channel) => {
                channel.set_level(level);
                channel.info(format_args!("log level set to {level}"));
                Ok(())
            }
            None => {
                self.core_log(
                    Severity::Error,
                    format_args!("log channel '{name}' not found"),
                );
                Err(Error::ChannelNotFound(name.to_string()))
            }
        }
    }

    /// Announce teardown and flush the sink.
    pub fn shutdown(&self) {
        self.core_log(Severity::Info, format_args!("shutting down logging"));
        self.sink.flush();
    }

    fn core_log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if let Some(core) = self.channels.get(CORE_CHANNEL) {
            core.log(severity, args);
        }
    }
}

/// Keeps the installed registry alive; dropping it shuts logging down.
pub struct LoggingGuard {
    _private: (),
}

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        shutdown();
    }
}

/// Build a registry from `config` and install it process-wide.
///
/// A previously installed registry is flushed and replaced. The returned
/// guard must be kept alive for the duration of the application; dropping
/// it (or calling [`shutdown`]) flushes and uninstalls the registry.
pub fn init(config: &LogConfig) -> Result<LoggingGuard, Error> {
    init_with_sink(config, Arc::new(StdoutSink))
}

/// [`init`] with a custom sink.
pub fn init_with_sink(
    config: &LogConfig,
    sink: Arc<dyn LogSink>,
) -> Result<LoggingGuard, Error> {
    let registry = Arc::new(LogRegistry::with_sink(config, sink)?);
    let previous = GLOBAL
        .write()
        .expect("lock poisoned")
        .replace(registry);
    if let Some(previous) = previous {
        previous.shutdown();
    }
    Ok(LoggingGuard { _private: () })
}

/// The installed registry, if any.
pub fn registry() -> Option<Arc<LogRegistry>> {
    GLOBAL.read().expect("lock poisoned").clone()
}

/// Flush and uninstall the process-wide registry.
///
/// Idempotent; log calls issued afterward are silently dropped.
pub fn shutdown() {
    let previous = GLOBAL.write().expect("lock poisoned").take();
    if let Some(registry) = previous {
        registry.shutdown();
    }
}

/// Emission point for the channel macros: resolve `name` in the installed
/// registry and log through it. No-op without a registry; unknown channels
/// take the [`LogRegistry::get`] error path.
#[doc(hidden)]
pub fn emit(name: &str, severity: Severity, args: fmt::Arguments<'_>) {
    if let Some(registry) = registry() {
        if let Ok(channel) = registry.get(name) {
            channel.log(severity, args);
        }
    }
}

/// Report through the installed `"Core"` channel, quietly skipping when
/// logging is not initialized. Used by the profiler.
pub(crate) fn emit_core(severity: Severity, args: fmt::Arguments<'_>) {
    if let Some(registry) = registry() {
        if let Some(core) = registry.channel(CORE_CHANNEL) {
            core.log(severity, args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::sink::MemorySink;

    fn memory_registry(config: &LogConfig) -> (LogRegistry, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let registry = LogRegistry::with_sink(config, sink.clone()).unwrap();
        (registry, sink)
    }

    fn plain_config() -> LogConfig {
        LogConfig {
            ansi_colors: false,
            ..LogConfig::default()
        }
    }

    #[test]
    fn test_init_writes_confirmation() {
        let (_registry, sink) = memory_registry(&plain_config());
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Core: logging initialized"));
    }

    #[test]
    fn test_get_unknown_reports_and_errors() {
        let (registry, sink) = memory_registry(&plain_config());
        let err = registry.get("Net").err().unwrap();
        assert_eq!(err, Error::ChannelNotFound("Net".to_string()));
        let lines = sink.lines();
        assert!(lines.last().unwrap().contains("log channel 'Net' not found"));
    }

    #[test]
    fn test_set_level_unknown_mutates_nothing() {
        let (registry, _sink) = memory_registry(&plain_config());
        let before: Vec<_> = registry
            .channels
            .values()
            .map(|c| (c.name().to_string(), c.level()))
            .collect();

        assert!(registry.set_level("Net", Severity::Critical).is_err());

        for (name, level) in before {
            assert_eq!(registry.channel(&name).unwrap().level(), level);
        }
    }

    #[test]
    fn test_directives_applied_at_init() {
        let mut config = plain_config();
        config.directives.push(("App".to_string(), Severity::Warn));
        let (registry, _sink) = memory_registry(&config);
        assert_eq!(registry.channel("App").unwrap().level(), Severity::Warn);
        assert_eq!(registry.channel("Core").unwrap().level(), Severity::Trace);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let config = LogConfig {
            pattern: "%Q".to_string(),
            ..LogConfig::default()
        };
        assert_eq!(
            LogRegistry::new(&config).err().unwrap(),
            Error::PatternDirective('Q')
        );
    }
}
