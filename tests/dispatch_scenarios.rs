//! End-to-end dispatch behaviour over recording handlers.

use front_controller::dispatch::{Dispatch, DispatchError, InvocationError};
use front_controller::routing::RoutingError;
use proptest::prelude::*;

mod common;

use common::{recording_dispatcher, Call};

#[test]
fn test_numeric_id_route() {
    let (d, journal) = recording_dispatcher(&[(r"^user/(\d+)$", "user/show/$1")], &["user"]);

    let mut out = Vec::new();
    let outcome = d.run(Some("/user/42"), &mut out).unwrap();

    let Dispatch::Dispatched(target) = outcome else {
        panic!("expected a dispatch");
    };
    assert_eq!(target.identity.handler_name, "UserController");
    assert_eq!(target.identity.method_name, "actionShow");
    assert_eq!(target.args, ["42"]);
    assert_eq!(
        journal.calls(),
        [Call {
            handler: "user".into(),
            action: "actionShow".into(),
            args: vec!["42".into()],
        }]
    );
    assert_eq!(out, b"user.actionShow(42)");
}

#[test]
fn test_empty_pattern_routes_everything_to_template() {
    let (d, journal) = recording_dispatcher(&[("", "site/index")], &["site"]);

    let outcome = d.run(Some("anything"), &mut Vec::new()).unwrap();
    assert!(outcome.is_dispatched());

    let calls = journal.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].action, "actionIndex");
    assert!(calls[0].args.is_empty());
}

#[test]
fn test_single_segment_fails_without_invoking() {
    let (d, journal) = recording_dispatcher(&[("^admin$", "")], &["admin"]);

    let err = d.run(Some("admin"), &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Routing(RoutingError::InsufficientSegments { found: 1, .. })
    ));
    assert_eq!(journal.instances(), 0);
    assert!(journal.calls().is_empty());
}

#[test]
fn test_first_entry_wins_over_duplicate() {
    let (d, journal) = recording_dispatcher(&[("^a$", "x/y"), ("^a$", "z/w")], &["x", "z"]);

    d.run(Some("a"), &mut Vec::new()).unwrap();
    let calls = journal.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].handler, "x");
    assert_eq!(calls[0].action, "actionY");
}

#[test]
fn test_first_match_ignores_specificity() {
    let (d, journal) = recording_dispatcher(
        &[("user", "site/index"), (r"^user/(\d+)$", "user/show/$1")],
        &["site", "user"],
    );

    d.run(Some("user/7"), &mut Vec::new()).unwrap();
    assert_eq!(journal.calls()[0].handler, "site");
}

#[test]
fn test_no_match_vs_malformed_match() {
    let (d, journal) = recording_dispatcher(&[("^admin$", "")], &["admin"]);

    // No route: silent, nothing built.
    assert_eq!(d.run(Some("public"), &mut Vec::new()).unwrap(), Dispatch::NoMatch);
    // Matching route with an unusable path: loud.
    assert!(d.run(Some("admin"), &mut Vec::new()).is_err());
    assert_eq!(journal.instances(), 0);
}

#[test]
fn test_empty_template_keeps_raw_path() {
    let (d, journal) = recording_dispatcher(&[("^news/", "")], &["news"]);

    d.run(Some("/news/archive/2024/05/"), &mut Vec::new()).unwrap();
    let calls = journal.calls();
    assert_eq!(calls[0].action, "actionArchive");
    assert_eq!(calls[0].args, ["2024", "05"]);
}

#[test]
fn test_unanchored_pattern_rewrites_inside_path() {
    // Only the matched portion is replaced; the rest of the path survives.
    let (d, journal) = recording_dispatcher(&[("old", "blog/read")], &["blog"]);

    d.run(Some("old/17"), &mut Vec::new()).unwrap();
    let calls = journal.calls();
    assert_eq!(calls[0].action, "actionRead");
    assert_eq!(calls[0].args, ["17"]);
}

#[test]
fn test_missing_handler_stops_dispatch() {
    let (d, journal) = recording_dispatcher(&[("^go$", "ghost/walk"), ("^go$", "site/index")], &["site"]);

    let err = d.run(Some("go"), &mut Vec::new()).unwrap_err();
    assert_eq!(err.kind(), "HandlerSourceNotFound");
    assert_eq!(journal.instances(), 0);
}

#[test]
fn test_unknown_action_is_invocation_failure() {
    let (d, journal) = recording_dispatcher(&[("^x$", "site/missing")], &["site"]);

    let err = d.run(Some("x"), &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Invocation { source: InvocationError::UnknownAction(_), .. }
    ));
    // The handler was built before the call failed.
    assert_eq!(journal.instances(), 1);
}

#[test]
fn test_bad_pattern_fails_even_if_later_route_would_match() {
    let (d, journal) = recording_dispatcher(&[("(", "a/b"), ("", "site/index")], &["site"]);

    let err = d.run(Some("home"), &mut Vec::new()).unwrap_err();
    assert_eq!(err.kind(), "PatternEngineFailure");
    assert!(journal.calls().is_empty());
}

#[test]
fn test_one_instance_per_dispatch() {
    let (d, journal) = recording_dispatcher(&[("", "site/index")], &["site"]);

    for _ in 0..3 {
        d.run(Some("/"), &mut Vec::new()).unwrap();
    }
    assert_eq!(journal.instances(), 3);
}

proptest! {
    #[test]
    fn prop_unmatched_paths_invoke_nothing(path in "[a-z0-9/]{0,20}") {
        let (d, journal) = recording_dispatcher(&[("^never-matches$", "site/index")], &["site"]);
        prop_assert_eq!(d.run(Some(path.as_str()), &mut Vec::new()).unwrap(), Dispatch::NoMatch);
        prop_assert_eq!(journal.instances(), 0);
    }

    #[test]
    fn prop_same_path_same_target(id in "[0-9]{1,6}", extra in "[a-z]{0,4}") {
        let (d, _) = recording_dispatcher(&[(r"^item/(\d+)(.*)$", "item/view/$1$2")], &["item"]);
        let uri = format!("item/{id}{extra}");
        prop_assert_eq!(d.resolve(Some(uri.as_str())).unwrap(), d.resolve(Some(uri.as_str())).unwrap());
    }
}
