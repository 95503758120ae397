//! The route table.
//!
//! # Responsibilities
//! - Hold the configured (pattern, template) pairs in file order
//! - Provide iteration in that order for first-match lookup
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Patterns are stored as text; they are compiled when tested, so a bad
//!   pattern is only reported by the request that reaches it
//! - Duplicate and overlapping patterns are kept as-is

use std::path::Path;

use crate::config::{load_config, ConfigError, RouteConfig};

/// One (pattern, template) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: String,
    pub template: String,
}

impl RouteEntry {
    pub fn new(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            template: template.into(),
        }
    }
}

impl From<RouteConfig> for RouteEntry {
    fn from(config: RouteConfig) -> Self {
        Self {
            pattern: config.pattern,
            template: config.template,
        }
    }
}

/// Ordered, read-only sequence of route entries.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table from any ordered source of entries.
    pub fn from_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<RouteEntry>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a table from the `[[routes]]` section of a loaded config.
    pub fn from_config(routes: Vec<RouteConfig>) -> Self {
        Self::from_entries(routes)
    }

    /// Read a config file and keep only its routes.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = load_config(path)?;
        let table = Self::from_config(config.routes);
        tracing::info!(routes = table.len(), path = %path.display(), "Route table loaded");
        Ok(table)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
