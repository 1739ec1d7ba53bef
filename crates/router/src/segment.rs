//! Pattern decomposition.
//!
//! A pattern such as `/users/:id/edit` is split on `/` into components. Every
//! component before the first parameter (a component starting with `:`) belongs
//! to the static prefix, which becomes the lookup key of the route table.
//! From the first parameter on, each component becomes a [`Segment`], so a
//! pattern never returns to being static after its first parameter:
//!
//! ```
//! use micro_router::{parse_pattern, Segment};
//!
//! let (prefix, segments) = parse_pattern("/users/:id/edit");
//! assert_eq!(prefix, "/users");
//! assert_eq!(segments, vec![Segment::param("id"), Segment::literal("edit")]);
//! ```

/// Marks a pattern component as a named parameter.
pub const PARAM_MARKER: char = ':';

/// One unit of the variable part of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Must equal the path component exactly, case-sensitive.
    Literal(String),
    /// Binds whatever path component occupies this position.
    Param(String),
}

impl Segment {
    pub fn literal(name: impl Into<String>) -> Self {
        Segment::Literal(name.into())
    }

    pub fn param(name: impl Into<String>) -> Self {
        Segment::Param(name.into())
    }

    /// The literal text, or the parameter name without its marker.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Segment::Literal(name) | Segment::Param(name) => name,
        }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal(_))
    }

    fn from_component(component: &str) -> Self {
        match component.strip_prefix(PARAM_MARKER) {
            Some(name) => Segment::param(name),
            None => Segment::literal(component),
        }
    }
}

/// Splits `pattern` into its static prefix and the segments that follow it.
///
/// Every string is accepted. A pattern without parameters is entirely static,
/// and a pattern whose first component is a parameter (`/:id`) has the empty
/// static prefix.
pub fn parse_pattern(pattern: &str) -> (String, Vec<Segment>) {
    let mut components = pattern.split('/');

    let mut static_components = Vec::new();
    let mut segments = Vec::new();

    for component in components.by_ref() {
        if component.starts_with(PARAM_MARKER) {
            segments.push(Segment::from_component(component));
            break;
        }
        static_components.push(component);
    }
    segments.extend(components.map(Segment::from_component));

    (static_components.join("/"), segments)
}
