//! The route table of a single HTTP method.
//!
//! Entries are keyed by their static prefix. Lookup walks up the implied prefix
//! hierarchy of the request path, stripping the last component on every step,
//! until it reaches a prefix that has been registered:
//!
//! ```text
//! /users/42/posts  ->  /users/42  ->  /users  ->  /
//! ```
//!
//! The first registered prefix found decides the outcome, even when none of its
//! entries match: a registered prefix shadows every shorter one.

use std::collections::HashMap;
use tracing::trace;

use crate::entry::RouteEntry;
use crate::params::Params;

/// Mapping from static prefix to the entries sharing it, in registration order.
///
/// Entries are kept in one list in registration order, the prefix map holds positions
/// into that list. Iteration replays the registration order across all prefixes.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    entries: Vec<RouteEntry<H>>,
    roots: HashMap<String, Vec<usize>>,
}

/// Result of a successful lookup: the chosen handler and its parameter binding.
#[derive(Debug)]
pub struct RouteMatch<'route, 'path, H> {
    entry: &'route RouteEntry<H>,
    params: Params<'route, 'path>,
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), roots: HashMap::new() }
    }

    /// Registers `pattern`, appending it after any entry that shares its static prefix.
    pub fn add(&mut self, pattern: impl Into<String>, handler: H) {
        self.push(RouteEntry::new(pattern, handler));
    }

    fn push(&mut self, entry: RouteEntry<H>) {
        trace!(
            pattern = entry.pattern(),
            static_prefix = entry.static_prefix(),
            segments = entry.segments().len(),
            "register route"
        );
        self.roots.entry(entry.static_prefix().to_owned()).or_default().push(self.entries.len());
        self.entries.push(entry);
    }

    /// Finds the handler for `path`.
    pub fn at<'route, 'path>(&'route self, path: &'path str) -> Option<RouteMatch<'route, 'path, H>> {
        let mut remaining = path;
        loop {
            if let Some(indices) = self.roots.get(remaining) {
                let matched = self.match_entries(path, indices);
                if matched.is_none() {
                    trace!(path, static_prefix = remaining, "no entry under static prefix matches");
                }
                return matched;
            }

            if remaining.len() < 2 {
                trace!(path, "no static prefix registered");
                return None;
            }

            remaining = match remaining.rfind('/') {
                Some(0) => "/",
                Some(index) => &remaining[..index],
                None => return None,
            };
        }
    }

    fn match_entries<'route, 'path>(&'route self, path: &'path str, indices: &[usize]) -> Option<RouteMatch<'route, 'path, H>> {
        indices
            .iter()
            .map(|&index| &self.entries[index])
            .find_map(|entry| entry.matches(path).map(|params| RouteMatch { entry, params }))
    }

    /// Number of registered entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<H>> {
        self.entries.iter()
    }

    /// Consumes the table, yielding its entries in registration order.
    pub fn into_entries(self) -> impl Iterator<Item = RouteEntry<H>> {
        self.entries.into_iter()
    }

    /// Replaces every handler, keeping the registration order.
    pub fn map<H2>(self, mut f: impl FnMut(H) -> H2) -> RouteTable<H2> {
        let entries = self.entries.into_iter().map(|entry| entry.map(&mut f)).collect::<Vec<_>>();
        RouteTable { entries, roots: self.roots }
    }
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Extend<RouteEntry<H>> for RouteTable<H> {
    fn extend<T: IntoIterator<Item = RouteEntry<H>>>(&mut self, iter: T) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl<'route, 'path, H> RouteMatch<'route, 'path, H> {
    pub fn handler(&self) -> &'route H {
        self.entry.handler()
    }

    pub fn params(&self) -> &Params<'route, 'path> {
        &self.params
    }

    pub fn into_params(self) -> Params<'route, 'path> {
        self.params
    }

    /// The pattern of the entry that matched.
    pub fn pattern(&self) -> &'route str {
        self.entry.pattern()
    }
}
