//! Per-request state handed to handlers.
//!
//! [`RequestContext`] owns everything a handler may need: the request head, the
//! collected body and the path parameters bound by the route that matched. The
//! binding lives exactly as long as the request, nothing is kept in the [`Mux`](crate::Mux)
//! once the handler returns.

use bytes::Bytes;
use http::request::Parts;
use http::{HeaderMap, Method, Uri, Version};
use micro_router::PathParams;

#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
    path_params: PathParams,
    body: Bytes,
}

impl RequestContext {
    /// Creates a new RequestContext from the request head, the parameters bound for it and its body
    pub fn new(parts: Parts, path_params: PathParams, body: Bytes) -> Self {
        Self { method: parts.method, uri: parts.uri, version: parts.version, headers: parts.headers, path_params, body }
    }

    /// Returns the HTTP method of the request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the URI of the request
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the HTTP version of the request
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the HTTP headers of the request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the path parameters bound by the matched route, empty when nothing matched
    pub fn path_params(&self) -> &PathParams {
        &self.path_params
    }

    /// Gets the raw value of the path parameter `name`
    ///
    /// ```
    /// # use bytes::Bytes;
    /// # use micro_mux::RequestContext;
    /// # use micro_router::PathParams;
    /// let (parts, ()) = http::Request::get("/users/42").body(()).unwrap().into_parts();
    /// let params = [("id", "42")].into_iter().collect::<PathParams>();
    /// let req = RequestContext::new(parts, params, Bytes::new());
    ///
    /// assert_eq!(req.param("id"), Some("42"));
    /// assert_eq!(req.param("name"), None);
    /// ```
    pub fn param(&self, name: impl AsRef<str>) -> Option<&str> {
        self.path_params.get(name)
    }

    /// Returns the collected request body
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}
