//! Middleware wraps request handlers with cross-cutting behavior.
//!
//! A [`Middleware`] turns one handler into another. Middleware registered on a
//! [`MuxBuilder`](crate::MuxBuilder) is applied to every route handler when the
//! mux is built, so it does not matter whether routes or middleware are added first.
//!
//! In a [`Stack`] the later middleware is the outer one: it sees the request first and the
//! response last.

mod identity;
mod middleware_fn;
mod stack;
mod trace;

pub use identity::Identity;
pub use middleware_fn::{MiddlewareFn, middleware_fn};
pub use stack::Stack;
pub use trace::{TraceHandler, TraceMiddleware};

pub trait Middleware<H> {
    type Output;

    fn wrap(&self, handler: H) -> Self::Output;
}
