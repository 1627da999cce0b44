//! Logging facilities for Stylebox.
//!
//! Stylebox uses the `tracing` crate for instrumentation. The libraries never
//! install a subscriber; to see logs, install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("stylebox=debug,stylebox_style=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "stylebox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "stylebox_core::signal";
    /// Declaration parser target.
    pub const PARSER: &str = "stylebox_style::parser";
    /// Style ledger target.
    pub const LEDGER: &str = "stylebox_style::ledger";
    /// Editor widget target.
    pub const EDITOR: &str = "stylebox::editor";
    /// Panel drag tracker target.
    pub const DRAG: &str = "stylebox::drag";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing an operation such as a submission pass.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "stylebox::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// Thin wrappers around the `tracing` macros with the core target preset.
#[macro_export]
macro_rules! stylebox_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! stylebox_debug {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! stylebox_warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
