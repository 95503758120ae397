//! Handler registry.
//!
//! # Responsibilities
//! - Map qualified handler names to constructors
//! - Produce a fresh handler instance per dispatch
//!
//! # Design Decisions
//! - Constructors take no arguments; collaborators are captured by the
//!   closure when the handler is registered
//! - Registration happens once at startup; lookups are read-only

use std::collections::HashMap;
use std::fmt;

use crate::dispatch::handler::Handler;

/// Zero-argument constructor for a handler type.
pub type HandlerFactory = Box<dyn Fn() -> Box<dyn Handler> + Send + Sync>;

/// Maps qualified handler names to their constructors.
#[derive(Default)]
pub struct HandlerRegistry {
    factories: HashMap<String, HandlerFactory>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under `qualified_name`, replacing any previous one.
    pub fn register<F, H>(&mut self, qualified_name: impl Into<String>, factory: F)
    where
        F: Fn() -> H + Send + Sync + 'static,
        H: Handler + 'static,
    {
        let qualified_name = qualified_name.into();
        tracing::debug!(handler = %qualified_name, "Handler registered");
        self.factories
            .insert(qualified_name, Box::new(move || Box::new(factory()) as Box<dyn Handler>));
    }

    /// Look up the constructor for `qualified_name`.
    pub fn resolve(&self, qualified_name: &str) -> Option<&HandlerFactory> {
        self.factories.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.factories.contains_key(qualified_name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}
