//! Composition root: wires configuration, handlers and shared resources
//! into a ready-to-run [`Dispatcher`].

use std::sync::Arc;

use crate::config::AppConfig;
use crate::controllers::{self, UserDirectory};
use crate::dispatch::{Dispatcher, HandlerRegistry};
use crate::resource::Resource;
use crate::routing::RouteTable;

/// Directory the stock `UserController` reads from.
fn user_directory() -> Resource<UserDirectory> {
    Resource::new("users", || {
        Ok(UserDirectory::new()
            .with_user(1, "admin")
            .with_user(42, "guest"))
    })
}

/// Build the dispatcher for `config`, with every stock handler registered.
pub fn build_dispatcher(config: &AppConfig) -> Dispatcher {
    let mut registry = HandlerRegistry::new();
    controllers::register_all(&mut registry, &config.dispatch, Arc::new(user_directory()));

    let routes = RouteTable::from_config(config.routes.clone());
    tracing::info!(routes = routes.len(), handlers = registry.len(), "Dispatcher ready");

    Dispatcher::new(Arc::new(routes), Arc::new(registry), config.dispatch.clone())
}
