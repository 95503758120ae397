//! The front controller.
//!
//! # Responsibilities
//! - Turn one request URI into a handler target
//! - Resolve the handler through the registry and build a fresh instance
//! - Invoke the derived method with the path arguments
//!
//! # Design Decisions
//! - At most one route fires per request; nothing after the first match is tried
//! - No match is a normal outcome, every other failure is returned to the caller
//! - No recovery or retries; reporting failures is the host's job
//! - Holds only read-only shared state, so one instance can serve many requests

use std::io::Write;
use std::sync::Arc;

use crate::config::DispatchConfig;
use crate::dispatch::error::{DispatchError, DispatchResult};
use crate::dispatch::registry::HandlerRegistry;
use crate::routing::matcher::{find_route, request_path, split_segments};
use crate::routing::naming::derive_target;
use crate::routing::{RouteTable, Target};

/// Outcome of a dispatch that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No route matched; nothing was invoked.
    NoMatch,
    /// The target's method ran to completion.
    Dispatched(Target),
}

impl Dispatch {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Dispatch::Dispatched(_))
    }
}

/// Front controller over a route table and a handler registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: Arc<RouteTable>,
    registry: Arc<HandlerRegistry>,
    conventions: DispatchConfig,
}

impl Dispatcher {
    pub fn new(routes: Arc<RouteTable>, registry: Arc<HandlerRegistry>, conventions: DispatchConfig) -> Self {
        Self {
            routes,
            registry,
            conventions,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Derive the target for `uri` without resolving or invoking anything.
    ///
    /// Returns `Ok(None)` when no route matches.
    pub fn resolve(&self, uri: Option<&str>) -> DispatchResult<Option<Target>> {
        let path = request_path(uri);

        let Some(route) = find_route(&self.routes, &path)? else {
            tracing::debug!(path = %path, "No route matched");
            return Ok(None);
        };

        let internal_path = route.internal_path(&path);
        tracing::debug!(
            path = %path,
            pattern = %route.entry.pattern,
            internal_path = %internal_path,
            "Route matched"
        );

        let target = derive_target(split_segments(&internal_path), &internal_path, &self.conventions)?;
        Ok(Some(target))
    }

    /// Run one request through the table and invoke the resolved handler.
    pub fn run(&self, uri: Option<&str>, out: &mut dyn Write) -> DispatchResult<Dispatch> {
        let Some(target) = self.resolve(uri)? else {
            return Ok(Dispatch::NoMatch);
        };

        let identity = &target.identity;
        let factory = self
            .registry
            .resolve(&identity.qualified_name)
            .ok_or_else(|| DispatchError::HandlerSourceNotFound(identity.qualified_name.clone()))?;

        let mut handler = factory();

        tracing::debug!(
            handler = %identity.qualified_name,
            method = %identity.method_name,
            args = ?target.args,
            "Invoking handler"
        );

        handler
            .invoke(&identity.method_name, &target.args, out)
            .map_err(|source| DispatchError::Invocation {
                target: identity.to_string(),
                source,
            })?;

        Ok(Dispatch::Dispatched(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::handler::{expect_arity, Handler, InvocationError};
    use crate::routing::{RouteEntry, RoutingError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Pages;

    impl Handler for Pages {
        fn invoke(&mut self, action: &str, args: &[String], out: &mut dyn Write) -> Result<(), InvocationError> {
            match action {
                "actionView" => {
                    expect_arity(action, args, 1)?;
                    write!(out, "page {}", args[0])?;
                    Ok(())
                }
                _ => Err(InvocationError::UnknownAction(action.to_string())),
            }
        }
    }

    fn dispatcher(entries: &[(&str, &str)], built: Arc<AtomicUsize>) -> Dispatcher {
        let mut registry = HandlerRegistry::new();
        registry.register("app::controllers::PageController", move || {
            built.fetch_add(1, Ordering::SeqCst);
            Pages
        });
        Dispatcher::new(
            Arc::new(RouteTable::from_entries(entries.iter().map(|(p, t)| RouteEntry::new(*p, *t)))),
            Arc::new(registry),
            DispatchConfig::default(),
        )
    }

    #[test]
    fn test_dispatches_to_handler() {
        let built = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(&[(r"^p/(\w+)$", "page/view/$1")], built.clone());

        let mut out = Vec::new();
        let outcome = d.run(Some("/p/about/"), &mut out).unwrap();

        assert!(outcome.is_dispatched());
        assert_eq!(String::from_utf8(out).unwrap(), "page about");
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_match_is_silent() {
        let built = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(&[("^p/", "page/view")], built.clone());

        let mut out = Vec::new();
        assert_eq!(d.run(Some("/other"), &mut out).unwrap(), Dispatch::NoMatch);
        assert!(out.is_empty());
        assert_eq!(built.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_uri_is_empty_path() {
        let built = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(&[("^$", "page/view/home")], built);

        let mut out = Vec::new();
        assert!(d.run(None, &mut out).unwrap().is_dispatched());
        assert_eq!(out, b"page home");
    }

    #[test]
    fn test_unknown_handler() {
        let built = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(&[("^x$", "ghost/view"), ("^x$", "page/view/x")], built.clone());

        let err = d.run(Some("x"), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, DispatchError::HandlerSourceNotFound(ref n) if n == "app::controllers::GhostController"));
        // The second, valid route is never tried.
        assert_eq!(built.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invocation_failures() {
        let built = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(&[("^a$", "page/edit"), ("^b$", "page/view")], built);

        let err = d.run(Some("a"), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Invocation { source: InvocationError::UnknownAction(_), .. }
        ));

        let err = d.run(Some("b"), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Invocation { source: InvocationError::Arity { expected: 1, actual: 0, .. }, .. }
        ));
    }

    #[test]
    fn test_pattern_failure_surfaces_at_dispatch() {
        let built = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(&[("[broken", "page/view/1")], built);

        let err = d.run(Some("anything"), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, DispatchError::Routing(RoutingError::Pattern { .. })));
        assert_eq!(err.kind(), "PatternEngineFailure");
    }

    #[test]
    fn test_resolve_does_not_instantiate() {
        let built = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(&[(r"^p/(\w+)$", "page/view/$1")], built.clone());

        let target = d.resolve(Some("p/faq")).unwrap().unwrap();
        assert_eq!(target.identity.method_name, "actionView");
        assert_eq!(target.args, ["faq"]);
        assert_eq!(built.load(Ordering::SeqCst), 0);
    }
}
