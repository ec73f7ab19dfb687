use std::fmt;
use std::sync::{Arc, Mutex};

use crate::error::RouteError;

type Complete = Box<dyn FnOnce(Result<(), RouteError>) + Send>;

/// The single-shot channel through which dispatch completion is reported.
///
/// A `Callback` wraps a caller-supplied closure and guarantees it runs at
/// most once. Clones share the same slot, so a handler may hand the callback
/// onward freely; whichever copy resolves first consumes the closure, and a
/// second resolution is a contract violation that panics.
///
/// The router itself only ever rejects: success completion belongs to the
/// handler that produced the response.
#[derive(Clone)]
pub struct Callback {
    slot: Arc<Mutex<Option<Complete>>>,
}

impl Callback {
    /// Wraps `complete` in a single-shot callback.
    pub fn new(complete: impl FnOnce(Result<(), RouteError>) + Send + 'static) -> Self {
        Callback {
            slot: Arc::new(Mutex::new(Some(Box::new(complete)))),
        }
    }

    /// Returns `true` if the callback has already been resolved.
    pub fn is_spent(&self) -> bool {
        self.slot.lock().unwrap().is_none()
    }

    /// Resolves the callback with `result`, consuming the wrapped closure.
    ///
    /// # Panics
    ///
    /// Panics if the callback was already resolved. Completion is
    /// exactly-once by contract, and a duplicate resolution has no channel
    /// left to report through.
    pub fn resolve(self, result: Result<(), RouteError>) {
        // Take the closure out before invoking it so the lock is not held
        // across user code.
        let complete = self.slot.lock().unwrap().take();
        match complete {
            Some(complete) => complete(result),
            None => panic!("completion callback resolved more than once"),
        }
    }

    /// Resolves the callback with a routing failure.
    pub fn reject(self, err: RouteError) {
        self.resolve(Err(err));
    }

    /// Resolves the callback successfully.
    pub fn done(self) {
        self.resolve(Ok(()));
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("spent", &self.is_spent())
            .finish()
    }
}
