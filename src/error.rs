use std::fmt;

use http::StatusCode;

/// Represents errors that can occur when registering a route pattern.
///
/// Invalid patterns are programmer errors; `set` surfaces them eagerly so a
/// misconfigured route table fails during setup, never during traffic.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PatternError {
    /// Patterns must be non-empty.
    Empty,
    /// Patterns must begin with a `/`.
    NoLeadingSlash,
    /// A wildcard segment is only allowed at the end of a pattern.
    WildcardNotLast,
    /// Parameters must be registered with a name.
    UnnamedParam,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "patterns must not be empty"),
            Self::NoLeadingSlash => write!(f, "patterns must begin with '/'"),
            Self::WildcardNotLast => {
                write!(f, "wildcards are only allowed at the end of a pattern")
            }
            Self::UnnamedParam => write!(f, "parameters must be registered with a name"),
        }
    }
}

impl std::error::Error for PatternError {}

/// A routing failure, delivered through the completion callback.
///
/// The router never writes a response body itself: it classifies the failure
/// and hands it to the caller, which decides how to render it onto the wire.
/// [`Display`](fmt::Display) is the human-readable message, [`kind`] the
/// machine-readable discriminator, and [`status_code`] the suggested HTTP
/// status.
///
/// [`kind`]: RouteError::kind
/// [`status_code`]: RouteError::status_code
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RouteError {
    /// No registered route matched the request's pathname.
    NotFound {
        /// The pathname that failed to resolve, for diagnostics.
        pathname: String,
    },
    /// A route matched, but it has no handler for the request's method.
    MethodNotAllowed {
        /// The request method that had no registered handler.
        method: String,
    },
}

impl RouteError {
    /// The HTTP status this failure maps to: 404 or 405.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// A stable machine-readable discriminator for this failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "router.not-found",
            Self::MethodNotAllowed { .. } => "router.method-not-allowed",
        }
    }

    /// The pathname that failed to resolve, if this is a [`NotFound`].
    ///
    /// [`NotFound`]: RouteError::NotFound
    pub fn pathname(&self) -> Option<&str> {
        match self {
            Self::NotFound { pathname } => Some(pathname),
            Self::MethodNotAllowed { .. } => None,
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { .. } => write!(f, "Resource Not Found"),
            Self::MethodNotAllowed { .. } => write!(f, "405 Method Not Allowed"),
        }
    }
}

impl std::error::Error for RouteError {}
