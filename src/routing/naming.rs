//! Handler and method name derivation.
//!
//! Segments are consumed from the front: the first names the handler, the
//! second the method, and whatever remains becomes the argument list.

use std::collections::VecDeque;
use std::fmt;

use crate::config::DispatchConfig;
use crate::routing::error::RoutingError;

/// Which handler and which of its methods a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerIdentity {
    /// e.g. `UserController`
    pub handler_name: String,
    /// e.g. `app::controllers::UserController`
    pub qualified_name: String,
    /// e.g. `actionShow`
    pub method_name: String,
}

impl fmt::Display for HandlerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.qualified_name, self.method_name)
    }
}

/// A fully derived dispatch target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub identity: HandlerIdentity,
    /// Remaining segments, in path order, uncoerced.
    pub args: Vec<String>,
}

/// Upper-case the first character (ASCII only), leaving the rest untouched.
pub fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(segment.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

pub fn handler_name(segment: &str, conventions: &DispatchConfig) -> String {
    format!("{}{}", capitalize_first(segment), conventions.controller_suffix)
}

pub fn method_name(segment: &str, conventions: &DispatchConfig) -> String {
    format!("{}{}", conventions.action_prefix, capitalize_first(segment))
}

pub fn qualified_name(handler_name: &str, conventions: &DispatchConfig) -> String {
    format!("{}{}", conventions.namespace, handler_name)
}

/// Consume `segments` into a target. `internal_path` is only used for error context.
pub fn derive_target(
    mut segments: VecDeque<String>,
    internal_path: &str,
    conventions: &DispatchConfig,
) -> Result<Target, RoutingError> {
    let insufficient = |found| RoutingError::InsufficientSegments {
        path: internal_path.to_string(),
        found,
    };

    let handler_segment = segments
        .pop_front()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| insufficient(0))?;
    let method_segment = segments
        .pop_front()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| insufficient(1))?;

    let handler_name = handler_name(&handler_segment, conventions);
    let identity = HandlerIdentity {
        qualified_name: qualified_name(&handler_name, conventions),
        handler_name,
        method_name: method_name(&method_segment, conventions),
    };

    Ok(Target {
        identity,
        args: segments.into(),
    })
}
