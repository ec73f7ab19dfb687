use std::sync::{Arc, Mutex};

use http::{Method, StatusCode};
use routrie::{Callback, MethodMap, Opts, Request, Response, RouteEntry, RouteError, Router};
use serde_json::Value;

fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Vec::new())
        .unwrap()
}

/// A callback that records every resolution it receives.
fn capture() -> (Callback, Arc<Mutex<Vec<Result<(), RouteError>>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let cb = Callback::new(move |result| sink.lock().unwrap().push(result));
    (cb, seen)
}

fn body_handler(body: &'static str) -> RouteEntry {
    RouteEntry::single(move |_req, res, _ctx, _cb| {
        *res.body_mut() = body.as_bytes().to_vec();
    })
}

#[test]
fn routes_multiple_urls() {
    let mut router = Router::new();
    router.set("/foo", body_handler("foo")).unwrap();
    router.set("/bar", body_handler("bar")).unwrap();

    for (path, body) in [("/foo", b"foo".as_slice()), ("/bar", b"bar".as_slice())] {
        let (cb, seen) = capture();
        let mut res = Response::new(Vec::new());
        router.handle_request(&request(Method::GET, path), &mut res, &Opts::new(), cb);

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body().as_slice(), body);
        assert!(seen.lock().unwrap().is_empty(), "no failure expected");
    }
}

#[test]
fn unregistered_path_rejects_with_not_found() {
    let router = Router::new();
    let (cb, seen) = capture();
    let mut res = Response::new(Vec::new());

    router.handle_request(&request(Method::GET, "/"), &mut res, &Opts::new(), cb);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1, "callback invoked exactly once");
    let err = seen[0].clone().unwrap_err();
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(err.kind(), "router.not-found");
    assert_eq!(err.pathname(), Some("/"));
    assert_eq!(err.to_string(), "Resource Not Found");
}

#[test]
fn params_reach_the_handler() {
    let mut router = Router::new();
    router
        .set(
            "/:foo",
            RouteEntry::single(|_req, res, ctx, _cb| {
                *res.body_mut() = ctx.params().get("foo").unwrap().as_bytes().to_vec();
            }),
        )
        .unwrap();

    let (cb, seen) = capture();
    let mut res = Response::new(Vec::new());
    router.handle_request(&request(Method::GET, "/bar"), &mut res, &Opts::new(), cb);

    assert_eq!(res.body(), b"bar");
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn splat_reaches_the_handler() {
    let mut router = Router::new();
    router
        .set(
            "/*",
            RouteEntry::single(|_req, res, ctx, _cb| {
                assert_eq!(ctx.splat(), Some(&["bar".to_owned()][..]));
                *res.body_mut() = ctx.splat().unwrap().join("/").into_bytes();
            }),
        )
        .unwrap();

    let (cb, seen) = capture();
    let mut res = Response::new(Vec::new());
    router.handle_request(&request(Method::GET, "/bar"), &mut res, &Opts::new(), cb);

    assert_eq!(res.body(), b"bar");
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn method_map_dispatches_and_rejects() {
    let mut router = Router::new();
    router
        .set(
            "/foo",
            MethodMap::new()
                .get(|_req, res, _ctx, _cb| *res.body_mut() = b"get".to_vec())
                .post(|_req, res, _ctx, _cb| *res.body_mut() = b"post".to_vec()),
        )
        .unwrap();

    for (method, body) in [
        (Method::GET, b"get".as_slice()),
        (Method::POST, b"post".as_slice()),
    ] {
        let (cb, seen) = capture();
        let mut res = Response::new(Vec::new());
        router.handle_request(&request(method, "/foo"), &mut res, &Opts::new(), cb);

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body().as_slice(), body);
        assert!(seen.lock().unwrap().is_empty());
    }

    let (cb, seen) = capture();
    let mut res = Response::new(Vec::new());
    router.handle_request(&request(Method::PUT, "/foo"), &mut res, &Opts::new(), cb);

    assert!(res.body().is_empty(), "no handler may run on a method miss");
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let err = seen[0].clone().unwrap_err();
    assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(err.kind(), "router.method-not-allowed");
    assert_eq!(err.to_string(), "405 Method Not Allowed");
}

#[test]
fn opts_are_merged_without_mutation() {
    let mut opts = Opts::new();
    opts.insert("tenant", "acme");

    let mut router = Router::new();
    router
        .set(
            "/jobs/:id",
            RouteEntry::single(|_req, _res, ctx, _cb| {
                assert_eq!(ctx.get("tenant"), Some(&Value::from("acme")));
                assert_eq!(ctx.params().get("id"), Some("9"));
                assert!(ctx.splat().is_none());
            }),
        )
        .unwrap();

    let (cb, _seen) = capture();
    let mut res = Response::new(Vec::new());
    router.handle_request(&request(Method::GET, "/jobs/9"), &mut res, &opts, cb);

    // the caller's bag is untouched by the per-request merge
    assert_eq!(opts.len(), 1);
    assert_eq!(opts.get("tenant"), Some(&Value::from("acme")));
}

#[test]
fn query_string_is_not_part_of_the_pathname() {
    let mut router = Router::new();
    router.set("/search", body_handler("found")).unwrap();

    let (cb, seen) = capture();
    let mut res = Response::new(Vec::new());
    router.handle_request(
        &request(Method::GET, "/search?q=trie&lang=en"),
        &mut res,
        &Opts::new(),
        cb,
    );

    assert_eq!(res.body(), b"found");
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn handler_may_complete_through_the_callback() {
    let mut router = Router::new();
    router
        .set("/done", RouteEntry::single(|_req, _res, _ctx, cb| cb.done()))
        .unwrap();

    let (cb, seen) = capture();
    let mut res = Response::new(Vec::new());
    router.handle_request(&request(Method::GET, "/done"), &mut res, &Opts::new(), cb);

    assert_eq!(*seen.lock().unwrap(), vec![Ok(())]);
}

#[test]
#[should_panic(expected = "live completion callback")]
fn spent_callback_is_a_contract_violation() {
    let mut router = Router::new();
    router
        .set(
            "/foo",
            RouteEntry::single(|_req, _res, _ctx, _cb| {
                panic!("the lookup must not run with a spent callback");
            }),
        )
        .unwrap();

    let cb = Callback::new(|_| {});
    cb.clone().done();

    let mut res = Response::new(Vec::new());
    router.handle_request(&request(Method::GET, "/foo"), &mut res, &Opts::new(), cb);
}

#[test]
fn overwritten_route_serves_the_new_entry() {
    let mut router = Router::new();
    router.set("/foo", body_handler("first")).unwrap();
    router.set("/foo", body_handler("second")).unwrap();

    let (cb, _seen) = capture();
    let mut res = Response::new(Vec::new());
    router.handle_request(&request(Method::GET, "/foo"), &mut res, &Opts::new(), cb);

    assert_eq!(res.body(), b"second");
}
