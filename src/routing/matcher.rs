//! Route matching logic.
//!
//! # Responsibilities
//! - Normalize the request URI into a request path
//! - Find the first route whose pattern matches the path
//! - Rewrite the path through the route template
//! - Split the internal path into segments
//!
//! # Design Decisions
//! - Patterns are unanchored: a pattern may match anywhere in the path
//! - First match wins, no specificity ranking
//! - An empty template leaves the request path untouched
//! - An empty pattern matches everything and yields the template verbatim

use std::collections::VecDeque;

use regex::Regex;

use crate::routing::error::RoutingError;
use crate::routing::table::{RouteEntry, RouteTable};

pub const PATH_SEPARATOR: char = '/';

/// A route that matched, together with its compiled pattern.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    regex: Regex,
}

impl RouteMatch<'_> {
    /// Produce the internal path for `path`, which must be the path this route matched.
    pub fn internal_path(&self, path: &str) -> String {
        if self.entry.template.is_empty() {
            return path.to_string();
        }
        if self.entry.pattern.is_empty() {
            return self.entry.template.clone();
        }
        let replacement = to_replacement(&self.entry.template);
        self.regex.replace_all(path, replacement.as_str()).into_owned()
    }
}

/// Strip separators from both ends of the URI. A missing URI is the empty path.
pub fn request_path(uri: Option<&str>) -> String {
    uri.map(|u| u.trim_matches(PATH_SEPARATOR))
        .unwrap_or_default()
        .to_string()
}

fn compile(pattern: &str) -> Result<Regex, RoutingError> {
    Regex::new(pattern).map_err(|source| RoutingError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Find the first route matching `path`, testing entries in table order.
///
/// A pattern that fails to compile aborts the search; entries after it are not tried.
pub fn find_route<'a>(table: &'a RouteTable, path: &str) -> Result<Option<RouteMatch<'a>>, RoutingError> {
    for entry in table {
        let regex = compile(&entry.pattern)?;
        let matched = regex.is_match(path);
        tracing::trace!(pattern = %entry.pattern, path = %path, matched, "Testing route");
        if matched {
            return Ok(Some(RouteMatch { entry, regex }));
        }
    }
    Ok(None)
}

/// Rewrite PCRE-style group references (`$1`, `\1`) into the `${1}` form
/// the regex crate expects. A `$` that does not start a reference is literal.
pub fn to_replacement(template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' && c != '\\' {
            out.push(c);
            continue;
        }

        let mut group = String::new();
        while group.len() < 2 {
            match chars.peek() {
                Some(d) if d.is_ascii_digit() => {
                    group.push(*d);
                    chars.next();
                }
                _ => break,
            }
        }

        if !group.is_empty() {
            out.push_str("${");
            out.push_str(&group);
            out.push('}');
        } else if c == '$' && chars.peek() == Some(&'{') {
            out.push('$');
        } else if c == '$' {
            out.push_str("$$");
        } else {
            out.push('\\');
        }
    }
    out
}

/// Split an internal path on the separator. Empty segments are kept.
pub fn split_segments(internal_path: &str) -> VecDeque<String> {
    internal_path
        .split(PATH_SEPARATOR)
        .map(str::to_string)
        .collect()
}
