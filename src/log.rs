//! Failure tracing, compiled out unless the `tracing` feature is enabled.

/// Emit a `trace`-level event under the `endiancast` target.
macro_rules! trace_failure {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "endiancast", $($arg)+);
    }};
}

pub(crate) use trace_failure;
