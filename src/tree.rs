use std::collections::HashMap;

use crate::error::PatternError;
use crate::params::Params;

/// A tree keyed by path segments, mapping registered patterns to entries.
///
/// Patterns are `/`-separated. A segment is one of:
///
/// ```ignore
///  Syntax    Type
///  literal   matches only an identical text segment
///  :name     matches any single non-empty segment, bound under `name`
///  *         matches the remainder of the path (one or more segments)
/// ```
///
/// At each position, literal children are tried before the parameter child,
/// which is tried before the wildcard, so overlapping patterns resolve
/// deterministically (`/foo` beats `/:bar` for the path `/foo`). The walk is
/// greedy: once an edge is taken it is never backtracked.
///
/// Matching is exact: segments compare byte-for-byte, case-sensitively, with
/// no percent-decoding and no slash normalization. `/foo` and `/foo/` are
/// distinct, and `//foo` does not match `/foo`.
///
/// The trie is opaque to what it stores; the [`Router`](crate::Router) keeps
/// handlers in it, tests keep strings.
pub struct RouteTrie<T> {
    root: Node<T>,
}

struct Node<T> {
    entry: Option<T>,
    literals: HashMap<String, Node<T>>,
    param: Option<ParamEdge<T>>,
    wildcard: Option<T>,
}

// A node holds at most one parameter child; re-registering under a new name
// rebinds the name and keeps the subtree.
struct ParamEdge<T> {
    name: String,
    node: Box<Node<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node {
            entry: None,
            literals: HashMap::new(),
            param: None,
            wildcard: None,
        }
    }
}

/// The outcome of resolving a path against a [`RouteTrie`].
///
/// A lookup that matches nothing is not an error: it yields an empty
/// resolution (`entry: None`) that the caller interprets.
#[derive(Debug)]
pub struct Resolution<'t, T> {
    /// The entry registered at the matched pattern, if any.
    pub entry: Option<&'t T>,
    /// Parameter bindings accumulated along the walk.
    pub params: Params,
    /// The ordered trailing segments captured by a wildcard, or `None` if no
    /// wildcard edge was taken.
    pub splat: Option<Vec<String>>,
}

impl<T> Resolution<'_, T> {
    fn miss() -> Self {
        Resolution {
            entry: None,
            params: Params::new(),
            splat: None,
        }
    }
}

impl<T> RouteTrie<T> {
    pub fn new() -> Self {
        RouteTrie {
            root: Node::default(),
        }
    }

    /// Registers `entry` under `pattern`, overwriting any previous entry at
    /// the same position (last write wins).
    ///
    /// The entry's shape is opaque to the trie. Invalid patterns (empty, not
    /// beginning with `/`, a non-final wildcard, an unnamed parameter) are
    /// rejected without modifying the trie.
    pub fn set(&mut self, pattern: &str, entry: T) -> Result<(), PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        let rest = pattern
            .strip_prefix('/')
            .ok_or(PatternError::NoLeadingSlash)?;
        if rest.is_empty() {
            self.root.entry = Some(entry);
            return Ok(());
        }
        validate(rest)?;

        let mut node = &mut self.root;
        let mut segments = rest.split('/').peekable();
        while let Some(segment) = segments.next() {
            if segment == "*" {
                node.wildcard = Some(entry);
                return Ok(());
            }
            node = match segment.strip_prefix(':') {
                Some(name) => {
                    let edge = node.param.get_or_insert_with(|| ParamEdge {
                        name: String::new(),
                        node: Box::default(),
                    });
                    if edge.name != name {
                        edge.name = name.to_owned();
                    }
                    &mut edge.node
                }
                None => node.literals.entry(segment.to_owned()).or_default(),
            };
            if segments.peek().is_none() {
                node.entry = Some(entry);
                return Ok(());
            }
        }
        unreachable!("split always yields at least one segment");
    }

    /// Resolves `path` against the trie.
    ///
    /// The path must already be a bare pathname: query string and fragment
    /// are the caller's to strip. Tokenization splits on `/` with no
    /// normalization; a path that does not begin with `/` resolves to the
    /// empty resolution.
    pub fn get(&self, path: &str) -> Resolution<'_, T> {
        let rest = match path.strip_prefix('/') {
            Some(rest) => rest,
            None => return Resolution::miss(),
        };
        if rest.is_empty() {
            return Resolution {
                entry: self.root.entry.as_ref(),
                params: Params::new(),
                splat: None,
            };
        }

        let segments: Vec<&str> = rest.split('/').collect();
        let mut node = &self.root;
        let mut params = Params::new();
        for (depth, segment) in segments.iter().enumerate() {
            if let Some(next) = node.literals.get(*segment) {
                node = next;
                continue;
            }
            // a parameter binds any single non-empty segment
            if !segment.is_empty() {
                if let Some(edge) = &node.param {
                    params.push(&edge.name, segment);
                    node = &edge.node;
                    continue;
                }
            }
            // the wildcard swallows the current segment and everything after
            if let Some(entry) = &node.wildcard {
                let splat = segments[depth..].iter().map(|s| (*s).to_owned()).collect();
                return Resolution {
                    entry: Some(entry),
                    params,
                    splat: Some(splat),
                };
            }
            return Resolution::miss();
        }

        Resolution {
            entry: node.entry.as_ref(),
            params,
            splat: None,
        }
    }
}

impl<T> Default for RouteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Checks the pattern grammar up front so a failed `set` leaves no partially
// inserted nodes behind.
fn validate(rest: &str) -> Result<(), PatternError> {
    let mut segments = rest.split('/').peekable();
    while let Some(segment) = segments.next() {
        if segment == "*" && segments.peek().is_some() {
            return Err(PatternError::WildcardNotLast);
        }
        if segment.strip_prefix(':') == Some("") {
            return Err(PatternError::UnnamedParam);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_without_entry_is_a_miss() {
        let mut trie = RouteTrie::new();
        trie.set("/a/b", "ab").unwrap();

        // "/a" exists as an interior node but was never registered
        assert!(trie.get("/a").entry.is_none());
        assert_eq!(trie.get("/a/b").entry, Some(&"ab"));
    }

    #[test]
    fn param_rebind_keeps_the_subtree() {
        let mut trie = RouteTrie::new();
        trie.set("/x/:a/deep", "old").unwrap();
        trie.set("/x/:b", "new").unwrap();

        let resolved = trie.get("/x/1/deep");
        assert_eq!(resolved.entry, Some(&"old"));
        assert_eq!(resolved.params.get("b"), Some("1"));
        assert_eq!(resolved.params.get("a"), None);
    }

    #[test]
    fn failed_set_leaves_no_trace() {
        let mut trie: RouteTrie<&str> = RouteTrie::new();
        assert_eq!(
            trie.set("/files/*/extra", "x"),
            Err(PatternError::WildcardNotLast)
        );
        assert!(trie.get("/files").entry.is_none());
        assert!(trie.get("/files/anything").entry.is_none());
    }

    #[test]
    fn root_pattern() {
        let mut trie = RouteTrie::new();
        trie.set("/", "root").unwrap();
        assert_eq!(trie.get("/").entry, Some(&"root"));
        assert!(trie.get("").entry.is_none());
    }
}
