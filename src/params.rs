use std::fmt;
use std::ops::Index;
use std::slice;

/// A single URL parameter, consisting of a key and a value.
#[derive(Clone, PartialEq, Eq)]
struct Param {
    key: String,
    value: String,
}

/// The named bindings extracted from parameter segments of a matched route.
///
/// The list is ordered: the first parameter in the pattern is also the first
/// entry here, so values can be read by index as well as by name.
///
/// ```rust
/// # fn main() -> Result<(), routrie::PatternError> {
/// let mut trie = routrie::RouteTrie::new();
/// trie.set("/users/:user/posts/:post", ())?;
///
/// let resolved = trie.get("/users/amy/posts/42");
/// assert_eq!(resolved.params.get("user"), Some("amy"));
/// assert_eq!(&resolved.params[1], "42");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Params(Vec<Param>);

impl Params {
    pub(crate) fn new() -> Self {
        Params(Vec::new())
    }

    /// Returns the value bound to the first parameter with the given name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.0
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value.as_str())
    }

    /// Returns an iterator over the `(name, value)` pairs in match order.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter(self.0.iter())
    }

    /// Returns the number of bound parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters were bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.0.push(Param {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }
}

impl Index<usize> for Params {
    type Output = str;

    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i].value
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the names and values of matched [`Params`].
pub struct ParamsIter<'p>(slice::Iter<'p, Param>);

impl<'p> Iterator for ParamsIter<'p> {
    type Item = (&'p str, &'p str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next()
            .map(|param| (param.key.as_str(), param.value.as_str()))
    }
}

impl ExactSizeIterator for ParamsIter<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
}
