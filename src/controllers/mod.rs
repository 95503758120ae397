//! Stock handlers shipped with the binary.

pub mod site;
pub mod user;

use std::sync::Arc;

use crate::config::DispatchConfig;
use crate::dispatch::HandlerRegistry;
use crate::resource::Resource;
use crate::routing::naming::{handler_name, qualified_name};

pub use site::SiteController;
pub use user::{UserController, UserDirectory};

/// Registry key for the handler addressed by path segment `segment`.
pub fn registry_key(segment: &str, conventions: &DispatchConfig) -> String {
    qualified_name(&handler_name(segment, conventions), conventions)
}

/// Register every stock handler under the names the dispatcher will derive.
pub fn register_all(registry: &mut HandlerRegistry, conventions: &DispatchConfig, users: Arc<Resource<UserDirectory>>) {
    registry.register(registry_key("site", conventions), || SiteController);
    registry.register(registry_key("user", conventions), move || UserController::new(users.clone()));
}
