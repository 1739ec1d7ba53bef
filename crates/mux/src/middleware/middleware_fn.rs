use crate::middleware::Middleware;

/// Middleware built from a closure, see [`middleware_fn`].
#[derive(Copy, Clone, Debug)]
pub struct MiddlewareFn<F> {
    f: F,
}

/// Uses `f` as a middleware, for one-off wrappers that do not deserve their own type.
///
/// ```
/// use micro_mux::middleware::middleware_fn;
/// use micro_mux::{Mux, RequestHandler};
/// use std::sync::Arc;
///
/// let shared = middleware_fn(|handler: Box<dyn RequestHandler>| Arc::new(handler));
/// let _mux = Mux::builder().middleware(shared).build();
/// ```
pub fn middleware_fn<In, Out, F>(f: F) -> MiddlewareFn<F>
where
    F: Fn(In) -> Out,
{
    MiddlewareFn { f }
}

impl<In, Out, F> Middleware<In> for MiddlewareFn<F>
where
    F: Fn(In) -> Out,
{
    type Output = Out;

    fn wrap(&self, handler: In) -> Self::Output {
        (self.f)(handler)
    }
}
