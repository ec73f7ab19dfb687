//! A URL request router: a segment trie that maps request paths to handlers,
//! with named parameters, trailing wildcards, per-route method dispatch, and
//! structured 404/405 signaling through a single-shot completion callback.
//!
//! The router sits between connection handling and business logic. It does
//! not serve sockets or parse HTTP itself: the surrounding transport hands it
//! a request descriptor and a callback, and the router either invokes the
//! matched handler or classifies the failure and rejects the callback. How a
//! failure is rendered onto the wire is entirely the caller's decision.
//!
//! ```rust
//! use routrie::{Callback, Opts, RouteEntry, Router};
//!
//! let mut router = Router::new();
//! router.set(
//!     "/users/:id",
//!     RouteEntry::single(|_req, res, ctx, _cb| {
//!         *res.body_mut() = ctx.params().get("id").unwrap().as_bytes().to_vec();
//!     }),
//! )?;
//!
//! let req = http::Request::builder().uri("/users/7").body(Vec::new())?;
//! let mut res = http::Response::new(Vec::new());
//!
//! router.handle_request(
//!     &req,
//!     &mut res,
//!     &Opts::new(),
//!     Callback::new(|result| {
//!         if let Err(err) = result {
//!             eprintln!("{} {}", err.status_code(), err);
//!         }
//!     }),
//! );
//! assert_eq!(res.body(), b"7");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Registered patterns may overlap; resolution is deterministic, with
//! literal segments winning over parameters and parameters over wildcards:
//!
//! ```ignore
//!  Pattern        /foo       /status     /blog/rust
//!  /foo           match
//!  /:page                    match       (no: two segments)
//!  /blog/*                               match, splat = ["rust"]
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod callback;
pub mod context;
pub mod error;
pub mod methods;
pub mod params;
pub mod router;
pub mod tree;

pub use callback::Callback;
pub use context::{Opts, RouteContext};
pub use error::{PatternError, RouteError};
pub use methods::MethodMap;
pub use params::Params;
pub use router::{Handler, RouteEntry, Router};
pub use tree::{Resolution, RouteTrie};

/// The request descriptor handed to [`Router::handle_request`].
pub type Request = http::Request<Vec<u8>>;

/// The response sink handlers write into.
pub type Response = http::Response<Vec<u8>>;
