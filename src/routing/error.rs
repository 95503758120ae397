//! Routing error definitions.

use thiserror::Error;

/// Failures raised while turning a request path into a handler target.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A route pattern could not be compiled by the regex engine.
    #[error("route pattern '{pattern}' is invalid: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The internal path did not yield both a handler and a method segment.
    #[error("internal path '{path}' has {found} usable segment(s), need a handler and a method")]
    InsufficientSegments { path: String, found: usize },
}

impl RoutingError {
    pub fn kind(&self) -> &'static str {
        match self {
            RoutingError::Pattern { .. } => "PatternEngineFailure",
            RoutingError::InsufficientSegments { .. } => "InsufficientSegments",
        }
    }
}
