//! Front controller: one request URI in, one handler method invoked.
//!
//! # Architecture Overview
//!
//! ```text
//!   Request URI
//!       │
//!       ▼
//!  ┌──────────┐   first match   ┌──────────┐  Target   ┌────────────────┐
//!  │ routing  │ ──────────────▶ │  naming  │ ────────▶ │   dispatch     │
//!  │  table   │  (regex, order) │ segments │           │ registry+invoke│
//!  └──────────┘                 └──────────┘           └───────┬────────┘
//!                                                              │
//!                                                              ▼
//!                                                     Handler::invoke(action, args)
//!
//!  Host (binary): config → logging → panic hook → Dispatcher → http | one-shot
//!  Failures returned by the dispatcher are sent to an ErrorReporter by the host.
//! ```

pub mod app;
pub mod config;
pub mod controllers;
pub mod dispatch;
pub mod errors;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resource;
pub mod routing;

pub use config::AppConfig;
pub use dispatch::{Dispatch, DispatchError, Dispatcher, Handler, HandlerRegistry, InvocationError};
pub use errors::{ErrorReporter, TracingReporter};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use resource::Resource;
pub use routing::{RouteEntry, RouteTable};
