//! Failure reporting for the host process.
//!
//! # Data Flow
//! ```text
//! DispatchError returned to host ─┐
//! panic anywhere in the process ──┼─▶ ErrorReporter::report(kind, message, location)
//! startup failure ────────────────┘        → TracingReporter (error! event)
//! ```

pub mod hooks;
pub mod reporter;

pub use hooks::install_panic_hook;
pub use reporter::{ErrorReporter, MemoryReporter, Report, TracingReporter};
