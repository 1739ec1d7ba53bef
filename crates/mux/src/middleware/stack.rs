use crate::middleware::Middleware;

/// Two middleware applied one after the other, `inner` first.
///
/// [`MuxBuilder::middleware`](crate::MuxBuilder::middleware) nests stacks to the left, so after
/// `.middleware(a).middleware(b)` the builder holds `Stack<Stack<Identity, A>, B>` and each route
/// handler ends up as `b(a(handler))`: `b` sees the request first and the response last.
#[derive(Default, Clone, Copy, Debug)]
pub struct Stack<Inner, Outer> {
    inner: Inner,
    outer: Outer,
}

impl<Inner, Outer> Stack<Inner, Outer> {
    pub fn new(inner: Inner, outer: Outer) -> Self {
        Self { inner, outer }
    }
}

impl<H, Inner, Outer> Middleware<H> for Stack<Inner, Outer>
where
    Inner: Middleware<H>,
    Outer: Middleware<Inner::Output>,
{
    type Output = Outer::Output;

    fn wrap(&self, handler: H) -> Self::Output {
        self.outer.wrap(self.inner.wrap(handler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{Identity, TraceMiddleware, middleware_fn};
    use crate::{NotFoundHandler, RequestContext, RequestHandler, handler_fn};
    use bytes::Bytes;
    use http::{Request, StatusCode};
    use micro_router::PathParams;

    fn context() -> RequestContext {
        let (parts, ()) = Request::get("/users/42").body(()).unwrap().into_parts();
        RequestContext::new(parts, PathParams::empty(), Bytes::new())
    }

    #[test]
    fn outer_wraps_inner() {
        let stack = Stack::new(
            middleware_fn(|pattern: String| format!("inner({pattern})")),
            middleware_fn(|pattern: String| format!("outer({pattern})")),
        );

        assert_eq!(stack.wrap(String::from("/users/:id")), "outer(inner(/users/:id))");
    }

    #[tokio::test]
    async fn empty_stack_leaves_handler_untouched() {
        let stack = Stack::<Identity, Identity>::default();
        let handler = stack.wrap(NotFoundHandler);

        assert_eq!(handler.invoke(context()).await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn stacked_handler_still_serves_requests() {
        let stack = Stack::new(Identity, TraceMiddleware);
        let handler = stack.wrap(handler_fn(|req: RequestContext| async move { req.uri().path().to_owned() }));

        assert_eq!(handler.invoke(context()).await.status(), StatusCode::OK);
    }
}
