use crate::body::ResponseBody;
use crate::responder::Responder;
use crate::RequestContext;
use async_trait::async_trait;
use http::{Response, StatusCode};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Anything that turns a request into a response.
///
/// The route engine treats handlers as opaque values, the [`Mux`](crate::Mux) stores them
/// boxed and calls them with the request's own context.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn invoke(&self, req: RequestContext) -> Response<ResponseBody>;
}

#[async_trait]
impl<T: RequestHandler + ?Sized> RequestHandler for Box<T> {
    async fn invoke(&self, req: RequestContext) -> Response<ResponseBody> {
        (**self).invoke(req).await
    }
}

#[async_trait]
impl<T: RequestHandler + ?Sized> RequestHandler for Arc<T> {
    async fn invoke(&self, req: RequestContext) -> Response<ResponseBody> {
        (**self).invoke(req).await
    }
}

/// an async Fn holder, see [`handler_fn`]
pub struct FnHandler<F> {
    f: F,
}

/// Wraps an async function or closure taking the [`RequestContext`] into a [`RequestHandler`].
///
/// ```
/// use micro_mux::{handler_fn, RequestContext};
///
/// async fn show_user(req: RequestContext) -> String {
///     format!("user {}", req.param("id").unwrap_or_default())
/// }
///
/// let _handler = handler_fn(show_user);
/// ```
pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F>
where
    F: Fn(RequestContext) -> Fut,
    Fut: Future,
    Fut::Output: Responder,
{
    FnHandler { f }
}

#[async_trait]
impl<F, Fut> RequestHandler for FnHandler<F>
where
    F: Fn(RequestContext) -> Fut + Send + Sync,
    Fut: Future + Send + 'static,
    Fut::Output: Responder,
{
    async fn invoke(&self, req: RequestContext) -> Response<ResponseBody> {
        (self.f)(req).await.into_response()
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").field("f", &std::any::type_name::<F>()).finish()
    }
}

/// Answers every request with `404 No matching route found`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotFoundHandler;

#[async_trait]
impl RequestHandler for NotFoundHandler {
    async fn invoke(&self, _req: RequestContext) -> Response<ResponseBody> {
        (StatusCode::NOT_FOUND, "No matching route found").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::Request;
    use http_body_util::BodyExt;
    use micro_router::PathParams;

    fn assert_is_handler<T: RequestHandler>(_handler: &T) {
        // no op
    }

    fn context(path: &str, params: PathParams) -> RequestContext {
        let (parts, ()) = Request::get(path).body(()).unwrap().into_parts();
        RequestContext::new(parts, params, Bytes::new())
    }

    #[test]
    fn assert_fn_is_handler() {
        async fn unit(_req: RequestContext) {}
        async fn text(_req: RequestContext) -> &'static str {
            "hello"
        }

        assert_is_handler(&handler_fn(unit));
        assert_is_handler(&handler_fn(text));
        assert_is_handler(&handler_fn(|req: RequestContext| async move { req.uri().path().to_owned() }));

        let boxed: Box<dyn RequestHandler> = Box::new(NotFoundHandler);
        assert_is_handler(&boxed);
    }

    #[tokio::test]
    async fn fn_handler_reads_params() {
        let handler = handler_fn(|req: RequestContext| async move { format!("user {}", req.param("id").unwrap_or_default()) });

        let params = [("id", "42")].into_iter().collect();
        let response = handler.invoke(context("/users/42", params)).await;
        let body = response.into_body().collect().await.unwrap().to_bytes();

        assert_eq!(body, Bytes::from("user 42"));
    }

    #[tokio::test]
    async fn not_found_handler() {
        let response = NotFoundHandler.invoke(context("/missing", PathParams::empty())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from("No matching route found"));
    }
}
