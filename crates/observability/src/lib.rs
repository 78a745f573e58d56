//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing with JSON logs on stdout.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(std::io::stdout);
}

/// Same as [`init`], but logs go to stderr so stdout stays free for program output.
pub fn init_stderr() {
    tracing::init(std::io::stderr);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
