//! Dispatch error definitions.

use thiserror::Error;

use crate::dispatch::handler::InvocationError;
use crate::routing::RoutingError;

/// Everything that can stop a dispatch after a route has been tested.
///
/// "No route matched" is not represented here; it is a normal outcome.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Bad pattern, or too few segments to name a handler and method.
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// The registry has nothing under the derived name.
    #[error("handler source '{0}' not found")]
    HandlerSourceNotFound(String),

    /// The handler was built but its method could not be run.
    #[error("invoking {target} failed: {source}")]
    Invocation {
        target: String,
        #[source]
        source: InvocationError,
    },
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

impl DispatchError {
    /// Taxonomy name, used as the `kind` when the failure is reported.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::Routing(e) => e.kind(),
            DispatchError::HandlerSourceNotFound(_) => "HandlerSourceNotFound",
            DispatchError::Invocation { .. } => "InvocationFailure",
        }
    }
}
