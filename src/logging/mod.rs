//! Named, leveled logging channels.
//!
//! Channels are created once at [`init`] from a [`LogConfig`], owned by a
//! [`LogRegistry`], and referenced by name. Each formats messages through a
//! [`LinePattern`] and writes to a shared [`LogSink`] (standard output by
//! default):
//!
//! ```text
//! [21:30:07] [info] Core: logging initialized
//! ```
//!
//! The `core_*!`/`app_*!` macros at the crate root are the usual call sites;
//! [`LogRegistry::get`] hands out channel references for direct use.

mod channel;
mod config;
mod macros;
mod pattern;
mod registry;
mod severity;
mod sink;

pub use channel::{Channel, ChannelSpec};
pub use config::{LogConfig, APP_CHANNEL, CORE_CHANNEL, LOG_ENV_VAR};
pub use pattern::{LinePattern, DEFAULT_PATTERN};
pub use registry::{
    emit, init, init_with_sink, registry, shutdown, LogRegistry, LoggingGuard,
};
pub use severity::Severity;
pub use sink::{LogSink, MemorySink, StdoutSink};

pub(crate) use registry::emit_core;
