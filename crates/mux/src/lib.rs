//! An async request dispatcher on top of [`micro_router`].
//!
//! Handlers are registered per method on a [`MuxBuilder`], optionally wrapped in
//! [middleware](crate::middleware), and the resulting [`Mux`] routes [`http::Request`]s to them.
//! The path parameters bound by the matched route travel with the request in its
//! [`RequestContext`], so concurrent requests never observe each other's parameters.
//!
//! ```
//! use micro_mux::{handler_fn, Mux, RequestContext};
//!
//! async fn show_post(req: RequestContext) -> String {
//!     format!("post {} of user {}", req.param("postId").unwrap_or_default(), req.param("id").unwrap_or_default())
//! }
//!
//! let mux = Mux::builder().get("/users/:id/posts/:postId", handler_fn(show_post)).build();
//!
//! let matched = mux.at(&http::Method::GET, "/users/7/posts/9").unwrap();
//! assert_eq!(matched.pattern(), "/users/:id/posts/:postId");
//! assert_eq!(matched.params().get("postId"), Some("9"));
//! ```

mod body;
mod error;
mod extract;
mod handler;
mod mux;
mod request;
mod responder;

pub mod middleware;

pub use body::ResponseBody;
pub use error::DispatchError;
pub use extract::ExtractError;
pub use handler::{FnHandler, NotFoundHandler, RequestHandler, handler_fn};
pub use mux::{DEFAULT_BODY_LIMIT, Mux, MuxBuilder};
pub use request::RequestContext;
pub use responder::Responder;

pub use micro_router::{PathParams, RouteError, RouteMethod};
