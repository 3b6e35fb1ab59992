//! Lightweight timing of named code sections.
//!
//! Three ways to measure, all reporting at `trace` through the `"Core"`
//! channel when logging is initialized (and skipping the report otherwise):
//!
//! - manual: [`start`]/[`end`]/[`elapsed_us`] against the global
//!   [`Profiler`], or against an owned instance;
//! - scoped: [`ScopedTimer`] reports its own lifetime on drop;
//! - wrapped: [`time_call`]/[`time_fallible`] time a single invocation.
//!
//! The `profile_*!` macros are the conditionally compiled call sites; see
//! the crate-level feature table.

mod instrument;
mod macros;
mod profiler;
mod scoped;

pub use instrument::{time_call, time_fallible};
pub use profiler::{
    elapsed_us, end, start, Profiler, GLOBAL_PROFILER, TIMER_NOT_STARTED_US,
};
pub use scoped::ScopedTimer;
