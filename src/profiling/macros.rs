//! Conditionally compiled profiling call sites.
//!
//! Active iff `any(feature = "profiling", debug_assertions)` and the
//! `max-perf` feature is off: on by default in debug-style builds, forced on
//! in release via `profiling`, compiled out everywhere via `max-perf`. When
//! inactive every macro expands to nothing (`profile_call!`/`profile_try!`
//! still evaluate and yield the wrapped expression).
//!
//! The direct API ([`Profiler`](crate::profiling::Profiler),
//! [`ScopedTimer`](crate::profiling::ScopedTimer), …) is always available;
//! only these call sites are gated.

/// Start a named timer on the global profiler.
#[cfg(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf")))]
#[macro_export]
macro_rules! profile_start {
    ($name:expr) => {
        $crate::profiling::start($name)
    };
}

/// Start a named timer on the global profiler.
#[cfg(not(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf"))))]
#[macro_export]
macro_rules! profile_start {
    ($name:expr) => {};
}

/// Stop a named timer on the global profiler, reporting its duration.
#[cfg(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf")))]
#[macro_export]
macro_rules! profile_end {
    ($name:expr) => {{
        let _ = $crate::profiling::end($name);
    }};
}

/// Stop a named timer on the global profiler, reporting its duration.
#[cfg(not(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf"))))]
#[macro_export]
macro_rules! profile_end {
    ($name:expr) => {};
}

/// Time the rest of the enclosing scope.
#[cfg(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf")))]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_guard = $crate::profiling::ScopedTimer::new($name);
    };
}

/// Time the rest of the enclosing scope.
#[cfg(not(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf"))))]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {};
}

/// Time an expression, yielding its value.
#[cfg(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf")))]
#[macro_export]
macro_rules! profile_call {
    ($name:expr, $op:expr) => {
        $crate::profiling::time_call($name, || $op)
    };
}

/// Time an expression, yielding its value.
#[cfg(not(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf"))))]
#[macro_export]
macro_rules! profile_call {
    ($name:expr, $op:expr) => {
        $op
    };
}

/// Time a `Result` expression, forwarding it unchanged.
#[cfg(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf")))]
#[macro_export]
macro_rules! profile_try {
    ($name:expr, $op:expr) => {
        $crate::profiling::time_fallible($name, || $op)
    };
}

/// Time a `Result` expression, forwarding it unchanged.
#[cfg(not(all(any(feature = "profiling", debug_assertions), not(feature = "max-perf"))))]
#[macro_export]
macro_rules! profile_try {
    ($name:expr, $op:expr) => {
        $op
    };
}
