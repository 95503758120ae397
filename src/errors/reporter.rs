//! Failure reporting.
//!
//! # Responsibilities
//! - Record unexpected failures with their kind, message and location
//! - Give the host one place to send every top-level failure
//!
//! # Design Decisions
//! - The dispatcher never reports; it returns errors and the host reports them
//! - The timestamp comes from the log subscriber, not from the record

use std::sync::Mutex;

use crate::dispatch::DispatchError;

/// Sink for failures the host could not handle.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, kind: &str, message: &str, location: &str);

    /// Report a dispatch failure under its taxonomy name.
    fn report_dispatch(&self, err: &DispatchError, location: &str) {
        self.report(err.kind(), &err.to_string(), location);
    }
}

/// Writes each failure as one structured `error` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, kind: &str, message: &str, location: &str) {
        tracing::error!(kind = %kind, location = %location, "{}", message);
    }
}

/// One captured report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: String,
    pub message: String,
    pub location: String,
}

/// Keeps reports in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn reports(&self) -> Vec<Report> {
        self.reports
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ErrorReporter for MemoryReporter {
    fn report(&self, kind: &str, message: &str, location: &str) {
        let report = Report {
            kind: kind.to_string(),
            message: message.to_string(),
            location: location.to_string(),
        };
        match self.reports.lock() {
            Ok(mut reports) => reports.push(report),
            Err(poisoned) => poisoned.into_inner().push(report),
        }
    }
}
