//! Logging configuration.

use std::env;

use super::channel::ChannelSpec;
use super::pattern::DEFAULT_PATTERN;
use super::severity::Severity;

/// Environment variable consulted by [`LogConfig::from_env`].
pub const LOG_ENV_VAR: &str = "CHASSIS_LOG";

/// Name of the channel carrying this layer's own messages.
pub const CORE_CHANNEL: &str = "Core";

/// Name of the channel carrying application messages.
pub const APP_CHANNEL: &str = "App";

/// Configuration for [`logging::init`](crate::logging::init).
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum severity every channel starts with.
    pub default_level: Severity,
    /// Line template, see [`LinePattern`](super::LinePattern).
    pub pattern: String,
    /// Whether to emit ANSI color sequences.
    pub ansi_colors: bool,
    /// Channels to create.
    pub channels: Vec<ChannelSpec>,
    /// Per-channel level overrides applied after init, `(name, level)`.
    pub directives: Vec<(String, Severity)>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: Severity::Trace,
            pattern: DEFAULT_PATTERN.to_string(),
            ansi_colors: true,
            channels: vec![ChannelSpec::new(CORE_CHANNEL), ChannelSpec::new(APP_CHANNEL)],
            directives: Vec::new(),
        }
    }
}

impl LogConfig {
    /// Create a production configuration (quiet, no colors).
    pub fn production() -> Self {
        Self {
            default_level: Severity::Warn,
            ansi_colors: false,
            ..Self::default()
        }
    }

    /// Build a configuration from the `CHASSIS_LOG` environment variable.
    ///
    /// Falls back to the default configuration when the variable is unset.
    pub fn from_env() -> Self {
        match env::var(LOG_ENV_VAR) {
            Ok(spec) => Self::from_spec(&spec),
            Err(_) => Self::default(),
        }
    }

    /// Parse a comma-separated level spec, e.g. `"debug"` or
    /// `"info,Core=trace,App=warn"`.
    ///
    /// A bare level sets the default; `name=level` entries become per-channel
    /// directives. Unrecognized tokens are ignored.
    pub fn from_spec(spec: &str) -> Self {
        let mut config = Self::default();
        for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((name, level)) => {
                    if let Ok(level) = level.trim().parse::<Severity>() {
                        config.directives.push((name.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = part.parse::<Severity>() {
                        config.default_level = level;
                    }
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, Severity::Trace);
        assert!(config.ansi_colors);
        assert_eq!(config.channels.len(), 2);
        assert_eq!(config.channels[0].name, CORE_CHANNEL);
        assert_eq!(config.channels[1].name, APP_CHANNEL);
    }

    #[test]
    fn test_config_production() {
        let config = LogConfig::production();
        assert_eq!(config.default_level, Severity::Warn);
        assert!(!config.ansi_colors);
    }

    #[test]
    fn test_from_spec_bare_level() {
        let config = LogConfig::from_spec("debug");
        assert_eq!(config.default_level, Severity::Debug);
        assert!(config.directives.is_empty());
    }

    #[test]
    fn test_from_spec_directives() {
        let config = LogConfig::from_spec("info, Core=trace, App=warn");
        assert_eq!(config.default_level, Severity::Info);
        assert_eq!(
            config.directives,
            vec![
                ("Core".to_string(), Severity::Trace),
                ("App".to_string(), Severity::Warn),
            ]
        );
    }

    #[test]
    fn test_from_spec_ignores_junk() {
        let config = LogConfig::from_spec("blah,Core=loud,,error");
        assert_eq!(config.default_level, Severity::Error);
        assert!(config.directives.is_empty());
    }
}
