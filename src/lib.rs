//! chassis - runtime utility layer for application skeletons
//!
//! Two small facilities with a shared lifecycle:
//!
//! - [`logging`]: named, leveled channels (`"Core"` for this layer's own
//!   messages, `"App"` for the application's) writing a human-readable
//!   console stream, with per-channel severity filters and line templates.
//! - [`profiling`]: named one-shot timers, RAII scope timing, and timed
//!   call wrappers, all reporting through the `"Core"` channel.
//!
//! # Quick start
//!
//! ```
//! use chassis::logging::LogConfig;
//!
//! fn main() -> Result<(), chassis::Error> {
//!     let _guard = chassis::logging::init(&LogConfig::default())?;
//!
//!     chassis::app_info!("application ready");
//!
//!     chassis::profile_start!("load");
//!     chassis::profile_end!("load");
//!
//!     let total = chassis::profile_call!("sum", (1..=10).sum::<u32>());
//!     chassis::core_debug!("sum = {total}");
//!
//!     Ok(())
//! } // guard drops here: flush + teardown
//! ```
//!
//! Initialize logging before anything that logs or profiles; keep the guard
//! alive until the end of the process. Calls issued after teardown are
//! silently dropped.
//!
//! # Feature flags
//!
//! - `profiling`: force the `profile_*!` macros on outside debug builds
//! - `max-perf`: compile the `profile_*!` macros out entirely
//!
//! With neither, the macros are active exactly in debug-style builds
//! (`debug_assertions`). The direct profiling API is never gated.

pub mod logging;
pub mod profiling;

mod error;

pub use error::Error;
pub use logging::{LogConfig, LoggingGuard, Severity};
pub use profiling::{Profiler, ScopedTimer};
