//! Channel macro facade.
//!
//! Severity-specific call sites bound to the fixed `"Core"` and `"App"`
//! channels, forwarding format arguments through the installed registry.
//! Without an installed registry they are no-ops; an unknown channel takes
//! the registry's error path.

/// Log to a named channel at an explicit severity.
///
/// Building block for the fixed-channel macros:
/// `channel_log!("Core", Severity::Info, "loaded {} plugins", n)`.
#[macro_export]
macro_rules! channel_log {
    ($name:expr, $severity:expr, $($arg:tt)*) => {
        $crate::logging::emit($name, $severity, ::std::format_args!($($arg)*))
    };
}

/// Log to the `"Core"` channel at `trace`.
#[macro_export]
macro_rules! core_trace {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::CORE_CHANNEL,
            $crate::logging::Severity::Trace,
            $($arg)*
        )
    };
}

/// Log to the `"Core"` channel at `debug`.
#[macro_export]
macro_rules! core_debug {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::CORE_CHANNEL,
            $crate::logging::Severity::Debug,
            $($arg)*
        )
    };
}

/// Log to the `"Core"` channel at `info`.
#[macro_export]
macro_rules! core_info {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::CORE_CHANNEL,
            $crate::logging::Severity::Info,
            $($arg)*
        )
    };
}

/// Log to the `"Core"` channel at `warn`.
#[macro_export]
macro_rules! core_warn {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::CORE_CHANNEL,
            $crate::logging::Severity::Warn,
            $($arg)*
        )
    };
}

/// Log to the `"Core"` channel at `error`.
#[macro_export]
macro_rules! core_error {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::CORE_CHANNEL,
            $crate::logging::Severity::Error,
            $($arg)*
        )
    };
}

/// Log to the `"Core"` channel at `critical`.
#[macro_export]
macro_rules! core_critical {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::CORE_CHANNEL,
            $crate::logging::Severity::Critical,
            $($arg)*
        )
    };
}

/// Log to the `"App"` channel at `trace`.
#[macro_export]
macro_rules! app_trace {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::APP_CHANNEL,
            $crate::logging::Severity::Trace,
            $($arg)*
        )
    };
}

/// Log to the `"App"` channel at `debug`.
#[macro_export]
macro_rules! app_debug {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::APP_CHANNEL,
            $crate::logging::Severity::Debug,
            $($arg)*
        )
    };
}

/// Log to the `"App"` channel at `info`.
#[macro_export]
macro_rules! app_info {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::APP_CHANNEL,
            $crate::logging::Severity::Info,
            $($arg)*
        )
    };
}

/// Log to the `"App"` channel at `warn`.
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::APP_CHANNEL,
            $crate::logging::Severity::Warn,
            $($arg)*
        )
    };
}

/// Log to the `"App"` channel at `error`.
#[macro_export]
macro_rules! app_error {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::APP_CHANNEL,
            $crate::logging::Severity::Error,
            $($arg)*
        )
    };
}

/// Log to the `"App"` channel at `critical`.
#[macro_export]
macro_rules! app_critical {
    ($($arg:tt)*) => {
        $crate::channel_log!(
            $crate::logging::APP_CHANNEL,
            $crate::logging::Severity::Critical,
            $($arg)*
        )
    };
}
