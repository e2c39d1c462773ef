//! Tracing utilities for array codec observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The calling crate must expose a `tracing` feature of its own.

/// Emit a debug-level event when a sequence type is resolved against the codec registry.
///
/// ```ignore
/// pgarray_trace_resolve!(type_name, codec.is_some());
/// ```
#[macro_export]
macro_rules! pgarray_trace_resolve {
    ($type_name:expr, $resolved:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(ty = %$type_name, resolved = $resolved, "pgarray.resolve");
    };
}

/// Emit an info-level event when an element type is added to the registry.
///
/// ```ignore
/// pgarray_trace_register!(core::any::type_name::<E>());
/// ```
#[macro_export]
macro_rules! pgarray_trace_register {
    ($type_name:expr) => {
        #[cfg(feature = "tracing")]
        tracing::info!(ty = %$type_name, "pgarray.register");
    };
}

/// Emit a debug-level event for a failed scan.
///
/// ```ignore
/// pgarray_trace_scan_error!(type_name, &err);
/// ```
#[macro_export]
macro_rules! pgarray_trace_scan_error {
    ($type_name:expr, $err:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(ty = %$type_name, error = %$err, "pgarray.scan");
    };
}
