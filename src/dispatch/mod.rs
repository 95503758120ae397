//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Request URI
//!     → routing (match route → internal path → Target)
//!     → registry.rs (qualified name → constructor, or HandlerSourceNotFound)
//!     → construct a fresh handler
//!     → handler.rs (invoke method with positional string arguments)
//!     → Dispatch::Dispatched | Dispatch::NoMatch | DispatchError
//! ```

pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod registry;

pub use dispatcher::{Dispatch, Dispatcher};
pub use error::{DispatchError, DispatchResult};
pub use handler::{expect_arity, Handler, InvocationError};
pub use registry::{HandlerFactory, HandlerRegistry};
