use crate::params::Params;
use crate::segment::{Segment, parse_pattern};

/// A single registered pattern paired with its handler.
///
/// The pattern is decomposed once, at construction, into the static prefix used as
/// the table key and the segments that must match whatever follows it.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pattern: String,
    static_prefix: String,
    segments: Vec<Segment>,
    handler: H,
}

impl<H> RouteEntry<H> {
    pub fn new(pattern: impl Into<String>, handler: H) -> Self {
        let pattern = pattern.into();
        let (static_prefix, segments) = parse_pattern(&pattern);
        Self { pattern, static_prefix, segments, handler }
    }

    /// The pattern as it was registered.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn static_prefix(&self) -> &str {
        &self.static_prefix
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    pub(crate) fn map<H2>(self, f: impl FnOnce(H) -> H2) -> RouteEntry<H2> {
        RouteEntry { pattern: self.pattern, static_prefix: self.static_prefix, segments: self.segments, handler: f(self.handler) }
    }

    /// Matches the part of `path` after this entry's static prefix against the segments.
    ///
    /// Empty components are dropped before counting, so `/users/42/` and `/users/42`
    /// both yield `["42"]`. The component count must equal the segment count; literals
    /// must be equal, params bind unconditionally.
    pub fn matches<'route, 'path>(&'route self, path: &'path str) -> Option<Params<'route, 'path>> {
        let rest = path.strip_prefix(self.static_prefix.as_str()).unwrap_or(path);
        let rest = rest.strip_prefix('/').unwrap_or(rest);

        let parts = rest.split('/').filter(|part| !part.is_empty()).collect::<Vec<_>>();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::with_capacity(self.segments.len());
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal != part => return None,
                Segment::Literal(_) => {}
                Segment::Param(name) => params.insert(name, part),
            }
        }
        Some(params)
    }
}
