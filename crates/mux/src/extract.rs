//! Typed decoding of request bodies.
//!
//! # Example
//! ```
//! # use serde::Deserialize;
//! # use micro_mux::{ExtractError, RequestContext};
//! # #[allow(dead_code)]
//! #[derive(Deserialize, Debug)]
//! struct Params {
//!     name: String,
//!     zip: String,
//! }
//!
//! pub async fn handle(req: RequestContext) -> Result<String, ExtractError> {
//!     let params = req.form::<Params>()?;
//!     Ok(format!("received params: {:?}", params))
//! }
//! ```

use http::StatusCode;
use mime::Mime;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::RequestContext;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("unsupported content type, expected {expected}")]
    UnsupportedContentType { expected: Mime },

    #[error("invalid form body: {source}")]
    Form {
        #[from]
        source: serde_urlencoded::de::Error,
    },

    #[error("invalid json body: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl ExtractError {
    pub fn unsupported_content_type(expected: Mime) -> Self {
        Self::UnsupportedContentType { expected }
    }

    /// The status code a client should see for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ExtractError::UnsupportedContentType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ExtractError::Form { .. } | ExtractError::Json { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl RequestContext {
    /// Parses the `Content-Type` header, `None` when it is absent or malformed.
    pub fn content_type(&self) -> Option<Mime> {
        self.headers().get(http::header::CONTENT_TYPE)?.to_str().ok()?.parse().ok()
    }

    /// Decodes an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    /// Fails when the content type is not a url encoded form, or the body does not
    /// deserialize into `T`.
    pub fn form<T: DeserializeOwned>(&self) -> Result<T, ExtractError> {
        let is_form = self
            .content_type()
            .is_some_and(|content_type| content_type.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str());
        if !is_form {
            return Err(ExtractError::unsupported_content_type(mime::APPLICATION_WWW_FORM_URLENCODED));
        }

        Ok(serde_urlencoded::from_bytes(self.body())?)
    }

    /// Decodes an `application/json` (or `+json`) body.
    ///
    /// # Errors
    /// Fails when the content type is not json, or the body does not deserialize into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ExtractError> {
        let is_json = self.content_type().is_some_and(|content_type| {
            content_type.type_() == mime::APPLICATION
                && (content_type.subtype() == mime::JSON || content_type.suffix() == Some(mime::JSON))
        });
        if !is_json {
            return Err(ExtractError::unsupported_content_type(mime::APPLICATION_JSON));
        }

        Ok(serde_json::from_slice(self.body())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::Request;
    use micro_router::PathParams;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq, Eq)]
    struct User {
        name: String,
        zip: String,
    }

    fn context(content_type: &str, body: &'static str) -> RequestContext {
        let (parts, ()) = Request::post("/users")
            .header(http::header::CONTENT_TYPE, content_type)
            .body(())
            .unwrap()
            .into_parts();
        RequestContext::new(parts, PathParams::empty(), Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn decode_form() {
        let req = context("application/x-www-form-urlencoded", "name=zava&zip=10086");
        let user = req.form::<User>().unwrap();
        assert_eq!(user, User { name: "zava".into(), zip: "10086".into() });
    }

    #[test]
    fn decode_form_with_charset() {
        let req = context("application/x-www-form-urlencoded; charset=utf-8", "name=a%20b&zip=1");
        assert_eq!(req.form::<User>().unwrap().name, "a b");
    }

    #[test]
    fn form_rejects_other_content_type() {
        let req = context("text/plain", "name=zava&zip=10086");
        let err = req.form::<User>().unwrap_err();
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn form_missing_field_is_bad_request() {
        let req = context("application/x-www-form-urlencoded", "name=zava");
        let err = req.form::<User>().unwrap_err();
        assert!(matches!(err, ExtractError::Form { .. }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn decode_json() {
        let req = context("application/json", r#"{"name":"zava","zip":"10086"}"#);
        assert_eq!(req.json::<User>().unwrap(), User { name: "zava".into(), zip: "10086".into() });

        let req = context("application/problem+json", r#"{"name":"x","zip":"y"}"#);
        assert_eq!(req.json::<User>().unwrap().name, "x");
    }

    #[test]
    fn json_rejects_malformed_body() {
        let req = context("application/json", "{");
        assert!(matches!(req.json::<User>().unwrap_err(), ExtractError::Json { .. }));
    }
}
