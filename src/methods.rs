use std::collections::HashMap;

use http::Method;
use log::debug;

use crate::callback::Callback;
use crate::context::RouteContext;
use crate::error::RouteError;
use crate::router::Handler;
use crate::{Request, Response};

/// A per-method family of handlers for a single route.
///
/// Passing a `MethodMap` to [`Router::set`](crate::Router::set) wraps it,
/// once, into a single handler that dispatches on the request's method and
/// rejects unmapped methods with a 405 through the completion callback.
///
/// ```rust
/// use routrie::MethodMap;
///
/// let map = MethodMap::new()
///     .get(|_req, res, _ctx, _cb| *res.body_mut() = b"read".to_vec())
///     .post(|_req, res, _ctx, _cb| *res.body_mut() = b"created".to_vec());
///
/// let mut router = routrie::Router::new();
/// router.set("/widgets", map).unwrap();
/// ```
#[derive(Default)]
pub struct MethodMap {
    handlers: HashMap<Method, Handler>,
}

impl MethodMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for `method`, replacing any previous one.
    pub fn on(
        mut self,
        method: Method,
        handler: impl Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert(method, Box::new(handler));
        self
    }

    /// Registers a handler for `GET` requests.
    pub fn get(
        self,
        handler: impl Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync + 'static,
    ) -> Self {
        self.on(Method::GET, handler)
    }

    /// Registers a handler for `POST` requests.
    pub fn post(
        self,
        handler: impl Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync + 'static,
    ) -> Self {
        self.on(Method::POST, handler)
    }

    /// Registers a handler for `PUT` requests.
    pub fn put(
        self,
        handler: impl Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync + 'static,
    ) -> Self {
        self.on(Method::PUT, handler)
    }

    /// Registers a handler for `DELETE` requests.
    pub fn delete(
        self,
        handler: impl Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync + 'static,
    ) -> Self {
        self.on(Method::DELETE, handler)
    }

    /// Registers a handler for `PATCH` requests.
    pub fn patch(
        self,
        handler: impl Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync + 'static,
    ) -> Self {
        self.on(Method::PATCH, handler)
    }

    /// Registers a handler for `HEAD` requests.
    pub fn head(
        self,
        handler: impl Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync + 'static,
    ) -> Self {
        self.on(Method::HEAD, handler)
    }
}

/// Converts a method map into a single handler compatible with the trie's
/// entry contract. Lookup is exact on the canonical method token; a miss
/// rejects the callback with a 405 and invokes no handler.
pub(crate) fn wrap(map: MethodMap) -> Handler {
    Box::new(move |req, res, ctx, cb| match map.handlers.get(req.method()) {
        Some(handler) => handler(req, res, ctx, cb),
        None => {
            debug!("no {} handler for {}", req.method(), req.uri().path());
            cb.reject(RouteError::MethodNotAllowed {
                method: req.method().to_string(),
            });
        }
    })
}
