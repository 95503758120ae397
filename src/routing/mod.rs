//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request URI
//!     → matcher.rs (strip separators → request path)
//!     → matcher.rs (first route whose pattern matches, in table order)
//!     → matcher.rs (template substitution → internal path → segments)
//!     → naming.rs (handler name, method name, arguments)
//!     → Return: Target, NoMatch, or RoutingError
//!
//! Route Table (at startup):
//!     RouteConfig[]
//!     → table.rs (keep file order)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Route table immutable at runtime, shareable across requests
//! - Deterministic: same input always derives the same target
//! - First match wins (ordered by position in the table)

pub mod error;
pub mod matcher;
pub mod naming;
pub mod table;

pub use error::RoutingError;
pub use matcher::{find_route, request_path, RouteMatch};
pub use naming::{HandlerIdentity, Target};
pub use table::{RouteEntry, RouteTable};
