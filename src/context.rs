use std::collections::HashMap;

use serde_json::Value;

use crate::params::Params;

/// The caller-supplied per-request configuration bag.
///
/// The dispatcher never mutates this: it clones the bag into a fresh
/// [`RouteContext`] for every request, so a single `Opts` can be shared
/// across all requests of a connection or a process.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    values: HashMap<String, Value>,
}

impl Opts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The merged per-request context handed to handlers: the caller's [`Opts`]
/// overlaid with the bindings the route trie extracted for this request.
///
/// Built fresh for every dispatch and discarded when the request completes.
#[derive(Clone, Debug)]
pub struct RouteContext {
    opts: Opts,
    params: Params,
    splat: Option<Vec<String>>,
}

impl RouteContext {
    pub(crate) fn new(opts: Opts, params: Params, splat: Option<Vec<String>>) -> Self {
        RouteContext {
            opts,
            params,
            splat,
        }
    }

    /// Looks up a caller-supplied value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.opts.get(key)
    }

    /// The named parameters bound by the matched pattern.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The trailing segments captured by a wildcard, if one matched.
    pub fn splat(&self) -> Option<&[String]> {
        self.splat.as_deref()
    }
}
