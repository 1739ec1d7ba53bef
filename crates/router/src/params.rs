//! Parameter bindings produced by a successful match.
//!
//! - [`Params`] borrows names from the route table and values from the matched path,
//!   it lives no longer than the lookup that produced it.
//! - [`PathParams`] owns its data, so it can travel with a request for the request's lifetime.
//!
//! Values are raw path components: no percent decoding and no type coercion.

use std::fmt;

/// Borrowed binding of parameter names to path components.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params<'route, 'path> {
    inner: Vec<(&'route str, &'path str)>,
}

impl<'route, 'path> Params<'route, 'path> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { inner: Vec::with_capacity(capacity) }
    }

    /// Binds `value` to `name`, a later binding of the same name replaces the earlier one.
    pub(crate) fn insert(&mut self, name: &'route str, value: &'path str) {
        match self.inner.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.inner.push((name, value)),
        }
    }

    /// Gets the value bound to `name`.
    #[inline]
    pub fn get(&self, name: impl AsRef<str>) -> Option<&'path str> {
        let name = name.as_ref();
        self.inner.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates bindings in the order the parameters appear in the pattern.
    pub fn iter(&self) -> impl Iterator<Item = (&'route str, &'path str)> + '_ {
        self.inner.iter().copied()
    }

    /// Copies the binding out of the route table and the path.
    pub fn to_path_params(&self) -> PathParams {
        self.iter().collect()
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Owned binding of parameter names to path components.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    inner: Vec<(String, String)>,
}

impl PathParams {
    /// Creates an empty binding, used for requests that matched no route.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gets the value bound to `name`.
    #[inline]
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.inner.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.inner.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<'a, 'b> FromIterator<(&'a str, &'b str)> for PathParams {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'b str)>>(iter: T) -> Self {
        Self { inner: iter.into_iter().map(|(name, value)| (name.to_owned(), value.to_owned())).collect() }
    }
}

impl From<Params<'_, '_>> for PathParams {
    fn from(params: Params<'_, '_>) -> Self {
        params.to_path_params()
    }
}

impl fmt::Debug for PathParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_binding_replaces_earlier() {
        let mut params = Params::with_capacity(2);
        params.insert("id", "1");
        params.insert("id", "2");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("2"));
    }

    #[test]
    fn owned_copy_keeps_order_and_values() {
        let mut params = Params::with_capacity(2);
        params.insert("id", "7");
        params.insert("postId", "9");

        let owned = params.to_path_params();
        assert_eq!(owned.len(), 2);
        assert_eq!(owned.get("id"), Some("7"));
        assert_eq!(owned.get("postId"), Some("9"));
        assert_eq!(owned.get("missing"), None);
        assert_eq!(owned.iter().collect::<Vec<_>>(), vec![("id", "7"), ("postId", "9")]);
    }

    #[test]
    fn empty_params() {
        let params = PathParams::empty();
        assert!(params.is_empty());
        assert_eq!(params.get("id"), None);
        assert_eq!(format!("{params:?}"), "{}");
    }
}
