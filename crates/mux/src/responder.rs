//! Response handling module that converts handler results into HTTP responses.
//!
//! The [`Responder`] trait defines how handler return values become responses, so a
//! handler may return a `String`, a `(StatusCode, &str)` tuple, a `Result` of two
//! responders and so on.

use crate::body::ResponseBody;
use crate::error::DispatchError;
use crate::extract::ExtractError;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Response, StatusCode};
use std::convert::Infallible;

/// A trait for types that can be converted into HTTP responses.
pub trait Responder {
    fn into_response(self) -> Response<ResponseBody>;
}

/// The Ok and Err variants must both implement Responder.
impl<T: Responder, E: Responder> Responder for Result<T, E> {
    fn into_response(self) -> Response<ResponseBody> {
        match self {
            Ok(t) => t.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

/// None case returns an empty response.
impl<T: Responder> Responder for Option<T> {
    fn into_response(self) -> Response<ResponseBody> {
        match self {
            Some(t) => t.into_response(),
            None => Response::new(ResponseBody::empty()),
        }
    }
}

/// Passes through pre-built responses.
impl<B> Responder for Response<B>
where
    B: Into<ResponseBody>,
{
    fn into_response(self) -> Response<ResponseBody> {
        self.map(Into::into)
    }
}

impl<T: Responder> Responder for (StatusCode, T) {
    fn into_response(self) -> Response<ResponseBody> {
        let (status, responder) = self;
        let mut response = responder.into_response();
        *response.status_mut() = status;
        response
    }
}

impl<T: Responder> Responder for (T, StatusCode) {
    fn into_response(self) -> Response<ResponseBody> {
        let (responder, status) = self;
        (status, responder).into_response()
    }
}

impl<T: Responder> Responder for Box<T> {
    fn into_response(self) -> Response<ResponseBody> {
        (*self).into_response()
    }
}

/// Unit type returns an empty response.
impl Responder for () {
    fn into_response(self) -> Response<ResponseBody> {
        Response::new(ResponseBody::empty())
    }
}

impl Responder for &'static str {
    fn into_response(self) -> Response<ResponseBody> {
        text_response(ResponseBody::from(self))
    }
}

impl Responder for String {
    fn into_response(self) -> Response<ResponseBody> {
        text_response(ResponseBody::from(self))
    }
}

impl Responder for Infallible {
    fn into_response(self) -> Response<ResponseBody> {
        match self {}
    }
}

impl Responder for ExtractError {
    fn into_response(self) -> Response<ResponseBody> {
        (self.status(), self.to_string()).into_response()
    }
}

impl Responder for DispatchError {
    fn into_response(self) -> Response<ResponseBody> {
        (self.status(), self.to_string()).into_response()
    }
}

fn text_response(body: ResponseBody) -> Response<ResponseBody> {
    let mut response = Response::new(body);
    response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    response
}
