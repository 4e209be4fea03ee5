//! Tracing/logging setup shared by the binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide tracing with the format chosen by the
/// `YAKSHOP_LOG_FORMAT` environment variable.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env(), "info");
}

/// Initialize process-wide tracing with an explicit format and the default
/// filter used when `RUST_LOG` is unset.
pub fn init_with(format: LogFormat, default_filter: &str) {
    tracing::init(format, default_filter);
}
