//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!
//! Consumers:
//!     → logging.rs (fmt subscriber on stderr, filtered by level)
//! ```
//!
//! # Design Decisions
//! - Structured fields, not interpolated strings, for anything worth grepping
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::init_logging;
