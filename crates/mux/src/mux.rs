//! The request dispatcher.
//!
//! A [`Mux`] is assembled once through [`MuxBuilder`] and is immutable afterwards, so it
//! can be shared by every task serving requests without any locking:
//!
//! ```
//! use micro_mux::middleware::TraceMiddleware;
//! use micro_mux::{handler_fn, Mux, RequestContext};
//!
//! async fn show_user(req: RequestContext) -> String {
//!     format!("user {}", req.param("id").unwrap_or_default())
//! }
//!
//! let mux = Mux::builder()
//!     .get("/users/:id", handler_fn(show_user))
//!     .middleware(TraceMiddleware)
//!     .build();
//!
//! assert!(mux.at(&http::Method::GET, "/users/42").is_some());
//! ```

use std::error::Error;
use std::fmt;

use bytes::Bytes;
use http::{Method, Request, Response};
use http_body::Body;
use http_body_util::{BodyExt, Limited};
use micro_router::{PathParams, RouteError, RouteMatch, RouteMethod, Router};
use tracing::{debug, warn};

use crate::error::DispatchError;
use crate::handler::{NotFoundHandler, RequestHandler};
use crate::middleware::{Identity, Middleware, Stack};
use crate::{RequestContext, ResponseBody};

type BoxedHandler = Box<dyn RequestHandler>;

/// Request bodies larger than this are rejected unless [`MuxBuilder::body_limit`] says otherwise.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// The immutable dispatcher produced by [`MuxBuilder::build`].
///
/// Holds one route table per method with every handler already wrapped in the middleware,
/// plus the not-found handler. It is `Send + Sync`, share it behind an `Arc`.
pub struct Mux {
    router: Router<BoxedHandler>,
    not_found: BoxedHandler,
    body_limit: usize,
}

impl Mux {
    /// Creates a new builder without middleware
    pub fn builder() -> MuxBuilder<Identity> {
        MuxBuilder::new()
    }

    /// Finds the handler for `method` and `path`, `None` when nothing matches
    pub fn at<'mux, 'path>(&'mux self, method: &Method, path: &'path str) -> Option<RouteMatch<'mux, 'path, BoxedHandler>> {
        self.router.at(method, path)
    }

    /// The route handlers, already wrapped in the middleware
    pub fn router(&self) -> &Router<BoxedHandler> {
        &self.router
    }

    /// Routes `request` to its handler and returns the handler's response.
    ///
    /// The route is looked up first. Requests that match no route, including requests with a
    /// method that has no route table, are answered by the not-found handler without reading
    /// their body. Otherwise the body is collected, up to the body limit, before the handler runs.
    ///
    /// # Errors
    /// Fails when the body of a matched request cannot be read or exceeds the body limit,
    /// [`DispatchError::status`] gives the status to answer with.
    pub async fn dispatch<B>(&self, request: Request<B>) -> Result<Response<ResponseBody>, DispatchError>
    where
        B: Body,
        B::Error: Into<Box<dyn Error + Send + Sync>>,
    {
        let (parts, body) = request.into_parts();

        let matched = self
            .router
            .at(&parts.method, parts.uri.path())
            .map(|matched| (matched.handler(), matched.pattern(), matched.params().to_path_params()));

        let Some((handler, pattern, params)) = matched else {
            debug!(method = %parts.method, path = parts.uri.path(), "no route matched");
            return Ok(self.not_found.invoke(RequestContext::new(parts, PathParams::empty(), Bytes::new())).await);
        };
        debug!(method = %parts.method, path = parts.uri.path(), pattern, "route matched");

        let body = match Limited::new(body, self.body_limit).collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                let e = DispatchError::limited(e, self.body_limit);
                warn!(cause = %e, method = %parts.method, path = parts.uri.path(), "read request body error");
                return Err(e);
            }
        };

        Ok(handler.invoke(RequestContext::new(parts, params, body)).await)
    }
}

impl fmt::Debug for Mux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mux")
            .field("routes", &self.router.len())
            .field("body_limit", &self.body_limit)
            .finish_non_exhaustive()
    }
}

/// Collects routes, middleware and the not-found handler of a [`Mux`], see [`Mux::builder`].
///
/// `M` is the middleware stacked so far, [`Identity`] for a fresh builder.
pub struct MuxBuilder<M> {
    router: Router<BoxedHandler>,
    not_found: Option<BoxedHandler>,
    body_limit: usize,
    middleware: M,
}

impl MuxBuilder<Identity> {
    fn new() -> Self {
        Self { router: Router::new(), not_found: None, body_limit: DEFAULT_BODY_LIMIT, middleware: Identity }
    }
}

macro_rules! method_route {
    ($name:ident, $route_method:ident, $method_str:literal) => {
        #[doc = concat!("Registers `handler` for ", $method_str, " requests matching `pattern`.")]
        pub fn $name(self, pattern: impl Into<String>, handler: impl RequestHandler + 'static) -> Self {
            self.route(RouteMethod::$route_method, pattern, handler)
        }
    };
}

impl<M> MuxBuilder<M> {
    /// Registers `handler` for `method` requests matching `pattern`.
    ///
    /// # Errors
    /// Returns [`RouteError::UnsupportedMethod`] unless `method` is one of `GET`, `POST`, `PUT`,
    /// `DELETE`, `PATCH`, `OPTIONS` or `HEAD`.
    pub fn register(
        mut self,
        method: &Method,
        pattern: impl Into<String>,
        handler: impl RequestHandler + 'static,
    ) -> Result<Self, RouteError> {
        self.router.add(method, pattern, Box::new(handler))?;
        Ok(self)
    }

    pub fn route(mut self, method: RouteMethod, pattern: impl Into<String>, handler: impl RequestHandler + 'static) -> Self {
        self.router.add_route(method, pattern, Box::new(handler));
        self
    }

    method_route!(get, Get, "GET");
    method_route!(post, Post, "POST");
    method_route!(put, Put, "PUT");
    method_route!(delete, Delete, "DELETE");
    method_route!(patch, Patch, "PATCH");
    method_route!(options, Options, "OPTIONS");
    method_route!(head, Head, "HEAD");

    /// Handles requests that match no route, defaults to [`NotFoundHandler`].
    ///
    /// The not-found handler is not wrapped in the middleware.
    pub fn not_found(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.not_found = Some(Box::new(handler));
        self
    }

    /// Caps the size of request bodies read by [`Mux::dispatch`], defaults to [`DEFAULT_BODY_LIMIT`].
    pub fn body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Adds `middleware` around every route handler, outside the middleware added before.
    pub fn middleware<M2>(self, middleware: M2) -> MuxBuilder<Stack<M, M2>>
    where
        M: Middleware<BoxedHandler>,
        M2: Middleware<M::Output>,
    {
        MuxBuilder {
            router: self.router,
            not_found: self.not_found,
            body_limit: self.body_limit,
            middleware: Stack::new(self.middleware, middleware),
        }
    }

    /// Registers every route of `other`, wrapped in `other`'s own middleware.
    ///
    /// The not-found handler and body limit of `other` are dropped.
    pub fn merge<M2>(mut self, other: MuxBuilder<M2>) -> Self
    where
        M2: Middleware<BoxedHandler>,
        M2::Output: RequestHandler + 'static,
    {
        self.router.merge(other.into_router());
        self
    }

    /// Registers every route of `other` under `prefix`, wrapped in `other`'s own middleware.
    ///
    /// Mounting a builder holding `/users/:id` at `/api` registers `/api/users/:id`. The
    /// not-found handler and body limit of `other` are dropped.
    pub fn mount<M2>(mut self, prefix: &str, other: MuxBuilder<M2>) -> Self
    where
        M2: Middleware<BoxedHandler>,
        M2::Output: RequestHandler + 'static,
    {
        self.router.mount(prefix, other.into_router());
        self
    }

    fn into_router(self) -> Router<BoxedHandler>
    where
        M: Middleware<BoxedHandler>,
        M::Output: RequestHandler + 'static,
    {
        let middleware = self.middleware;
        self.router.map(|handler| Box::new(middleware.wrap(handler)) as BoxedHandler)
    }

    /// Builds the mux from the accumulated routes and middleware
    pub fn build(self) -> Mux
    where
        M: Middleware<BoxedHandler>,
        M::Output: RequestHandler + 'static,
    {
        let body_limit = self.body_limit;
        let not_found = self.not_found.unwrap_or_else(|| Box::new(NotFoundHandler) as BoxedHandler);
        let router = MuxBuilder { router: self.router, not_found: None, body_limit, middleware: self.middleware }.into_router();
        debug!(routes = router.len(), body_limit, "mux built");
        Mux { router, not_found, body_limit }
    }
}

impl<M: fmt::Debug> fmt::Debug for MuxBuilder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MuxBuilder")
            .field("routes", &self.router.len())
            .field("body_limit", &self.body_limit)
            .field("middleware", &self.middleware)
            .finish_non_exhaustive()
    }
}
