//! Request logging.
//!
//! [`TraceMiddleware`] wraps every handler in a [`TraceHandler`], which logs the method,
//! path, status and elapsed time of each request it serves at `INFO` level.

use crate::handler::RequestHandler;
use crate::middleware::Middleware;
use crate::{RequestContext, ResponseBody};
use async_trait::async_trait;
use http::Response;
use std::time::Instant;
use tracing::info;

#[derive(Default, Clone, Copy, Debug)]
pub struct TraceMiddleware;

#[derive(Debug)]
pub struct TraceHandler<H> {
    handler: H,
}

impl<H: RequestHandler> Middleware<H> for TraceMiddleware {
    type Output = TraceHandler<H>;

    fn wrap(&self, handler: H) -> Self::Output {
        TraceHandler { handler }
    }
}

#[async_trait]
impl<H: RequestHandler> RequestHandler for TraceHandler<H> {
    async fn invoke(&self, req: RequestContext) -> Response<ResponseBody> {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let start = Instant::now();

        let response = self.handler.invoke(req).await;

        info!(%method, %path, status = response.status().as_u16(), elapsed = ?start.elapsed(), "request handled");
        response
    }
}
