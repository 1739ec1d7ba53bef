//! A small request routing engine
//!
//! Routes are registered as `/`-separated patterns where a component starting with `:`
//! names a parameter, e.g. `/users/:id/posts/:postId`. Each pattern is split into a
//! static prefix (the components before the first parameter) and a list of segments.
//! The static prefix is the lookup key, so there is no prefix tree: a lookup strips path
//! components from the right until it reaches a registered prefix, then tries the entries
//! registered under that prefix in registration order.
//!
//! # Example
//!
//! ```
//! use http::Method;
//! use micro_router::Router;
//!
//! let mut router = Router::new();
//! router.add(&Method::GET, "/users/:id", "show user").unwrap();
//! router.add(&Method::GET, "/users/:id/edit", "edit user").unwrap();
//!
//! let matched = router.at(&Method::GET, "/users/42/edit").unwrap();
//! assert_eq!(*matched.handler(), "edit user");
//! assert_eq!(matched.params().get("id"), Some("42"));
//!
//! assert!(router.at(&Method::GET, "/users/42/delete").is_none());
//! assert!(router.add(&Method::TRACE, "/", "trace").is_err());
//! ```
//!
//! # Matching rules
//!
//! - The longest registered static prefix of the path is the only one consulted. If none
//!   of its entries match, the lookup fails, shorter prefixes are not tried.
//! - Among entries sharing a prefix the first registered one that matches wins, a more
//!   specific literal registered later does not take precedence.
//! - Empty path components are ignored when matching, so `/users/42/` matches `/users/:id`.
//! - Literal segments compare case-sensitively, parameter values are taken verbatim.
//!
//! # Concurrency
//!
//! Registration takes `&mut self`. Build the router first, then share it (for example in
//! an `Arc`) and look up from as many threads as needed.

mod entry;
mod error;
mod method;
mod params;
mod router;
mod segment;
mod table;

pub use entry::RouteEntry;
pub use error::RouteError;
pub use method::RouteMethod;
pub use params::{Params, PathParams};
pub use router::Router;
pub use segment::{PARAM_MARKER, Segment, parse_pattern};
pub use table::{RouteMatch, RouteTable};
