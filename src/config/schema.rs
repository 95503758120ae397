//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the front
//! controller. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP host settings (only used by `serve`).
    pub server: ServerConfig,

    /// Logging settings.
    pub logging: LoggingConfig,

    /// Handler naming conventions.
    pub dispatch: DispatchConfig,

    /// Ordered route definitions. Earlier entries win.
    pub routes: Vec<RouteConfig>,
}

/// HTTP host configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Total time allowed for one request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// How handler and method names are derived from path segments.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Prefix joined to the handler name to form the registry key.
    pub namespace: String,

    /// Appended to the capitalized first segment.
    pub controller_suffix: String,

    /// Prepended to the capitalized second segment.
    pub action_prefix: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            namespace: "app::controllers::".to_string(),
            controller_suffix: "Controller".to_string(),
            action_prefix: "action".to_string(),
        }
    }
}

/// One route: a regular expression and the internal path it rewrites to.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Regular expression tested against the request path (unanchored).
    #[serde(default)]
    pub pattern: String,

    /// Replacement template; empty means "use the request path as is".
    #[serde(default)]
    pub template: String,
}

impl RouteConfig {
    pub fn new(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            template: template.into(),
        }
    }
}
