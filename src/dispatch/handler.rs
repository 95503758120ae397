//! Handler trait and invocation errors.

use std::io::Write;
use thiserror::Error;

/// A request handler: an object whose methods are addressed by name.
///
/// Implementations match on `action` and return [`InvocationError::UnknownAction`]
/// for names they do not define. Output goes to `out`; what is written is the
/// handler's business.
pub trait Handler: Send {
    fn invoke(&mut self, action: &str, args: &[String], out: &mut dyn Write) -> Result<(), InvocationError>;
}

/// Errors raised by the invoked handler method.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The handler has no method with this name.
    #[error("no action named '{0}'")]
    UnknownAction(String),

    /// The method exists but takes a different number of arguments.
    #[error("action '{action}' takes {expected} argument(s), got {actual}")]
    Arity {
        action: String,
        expected: usize,
        actual: usize,
    },

    /// Writing the handler's output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// The method ran and reported a failure of its own.
    #[error("{0}")]
    Failed(String),
}

/// Check that `args` has exactly `expected` entries.
pub fn expect_arity(action: &str, args: &[String], expected: usize) -> Result<(), InvocationError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(InvocationError::Arity {
            action: action.to_string(),
            expected,
            actual: args.len(),
        })
    }
}
