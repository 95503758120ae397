//! Lazily-initialized shared resources.
//!
//! A [`Resource`] is created by the composition root with an initializer and
//! handed to the handlers that need it. The initializer runs on first use
//! only; until it succeeds, every `get` tries again.

use std::fmt;

use once_cell::sync::OnceCell;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{name} connection failed: {reason}")]
    Init { name: &'static str, reason: String },
}

type Initializer<T> = Box<dyn Fn() -> Result<T, String> + Send + Sync>;

pub struct Resource<T> {
    name: &'static str,
    cell: OnceCell<T>,
    init: Initializer<T>,
}

impl<T> Resource<T> {
    pub fn new<F>(name: &'static str, init: F) -> Self
    where
        F: Fn() -> Result<T, String> + Send + Sync + 'static,
    {
        Self {
            name,
            cell: OnceCell::new(),
            init: Box::new(init),
        }
    }

    /// A resource that is already available.
    pub fn ready(name: &'static str, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        let cell = OnceCell::new();
        let _ = cell.set(value.clone());
        Self {
            name,
            cell,
            init: Box::new(move || Ok(value.clone())),
        }
    }

    pub fn get(&self) -> Result<&T, ResourceError> {
        self.cell.get_or_try_init(|| {
            tracing::debug!(resource = self.name, "Initializing resource");
            (self.init)().map_err(|reason| ResourceError::Init {
                name: self.name,
                reason,
            })
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> fmt::Debug for Resource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
