use log::debug;

use crate::callback::Callback;
use crate::context::{Opts, RouteContext};
use crate::error::{PatternError, RouteError};
use crate::methods::{self, MethodMap};
use crate::tree::RouteTrie;
use crate::{Request, Response};

/// A handler invoked for a matched route.
///
/// Handlers receive the request, the response sink to write into, the merged
/// per-request context, and the completion callback. A handler either
/// produces a response or resolves the callback (with a failure or with
/// `Ok(())`); the router does not inspect or transform what it does.
pub type Handler = Box<dyn Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync>;

/// The value bound to a pattern: either one handler for all methods, or a
/// per-method family of handlers.
///
/// The variant is decided once, at registration time; per-method entries are
/// wrapped by [`MethodMap`] dispatch before they reach the trie, so lookup
/// never re-inspects the shape.
pub enum RouteEntry {
    Single(Handler),
    ByMethod(MethodMap),
}

impl RouteEntry {
    /// Binds a single handler, invoked for every method.
    pub fn single(
        handler: impl Fn(&Request, &mut Response, &RouteContext, Callback) + Send + Sync + 'static,
    ) -> Self {
        RouteEntry::Single(Box::new(handler))
    }
}

impl From<MethodMap> for RouteEntry {
    fn from(map: MethodMap) -> Self {
        RouteEntry::ByMethod(map)
    }
}

/// The per-request dispatch entry point.
///
/// A `Router` is populated with [`set`](Router::set) during setup and then
/// serves lookups via [`handle_request`](Router::handle_request). It holds no
/// per-request mutable state, so a populated router can be shared freely
/// (e.g. behind an `Arc`) across threads.
#[derive(Default)]
pub struct Router {
    trie: RouteTrie<Handler>,
}

impl Router {
    pub fn new() -> Self {
        Router {
            trie: RouteTrie::new(),
        }
    }

    /// Registers `entry` under `pattern`.
    ///
    /// Patterns use `/`-separated segments, `:name` for a parameter segment
    /// and a trailing `*` for a wildcard. Re-registering a pattern replaces
    /// the previous entry. Accepts a [`RouteEntry`] or anything convertible
    /// into one, such as a [`MethodMap`].
    pub fn set(
        &mut self,
        pattern: &str,
        entry: impl Into<RouteEntry>,
    ) -> Result<(), PatternError> {
        let handler = match entry.into() {
            RouteEntry::Single(handler) => handler,
            RouteEntry::ByMethod(map) => methods::wrap(map),
        };
        self.trie.set(pattern, handler)
    }

    /// Dispatches a request: resolves the pathname, merges `opts` with the
    /// extracted `params` and `splat` into a fresh [`RouteContext`], and
    /// invokes the matched handler with `(req, res, ctx, callback)`.
    ///
    /// If no route matches, the callback is rejected with a
    /// [`RouteError::NotFound`] carrying the attempted pathname. The caller's
    /// `opts` is never mutated. The pathname comes from the request URI,
    /// which excludes query string and fragment.
    ///
    /// # Panics
    ///
    /// Panics if `callback` is already spent. Dispatching without a live
    /// completion callback is a contract violation with no channel left to
    /// report through, so it fails loudly before any lookup happens.
    pub fn handle_request(
        &self,
        req: &Request,
        res: &mut Response,
        opts: &Opts,
        callback: Callback,
    ) {
        assert!(
            !callback.is_spent(),
            "handle_request requires a live completion callback"
        );

        let pathname = req.uri().path();
        let resolved = self.trie.get(pathname);
        let handler = match resolved.entry {
            Some(handler) => handler,
            None => {
                debug!("no route for {pathname}");
                callback.reject(RouteError::NotFound {
                    pathname: pathname.to_owned(),
                });
                return;
            }
        };

        let ctx = RouteContext::new(opts.clone(), resolved.params, resolved.splat);
        handler(req, res, &ctx, callback);
    }
}
