use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("method {method} not valid")]
    UnsupportedMethod { method: String },
}

impl RouteError {
    pub fn unsupported_method<S: ToString>(method: S) -> Self {
        Self::UnsupportedMethod { method: method.to_string() }
    }
}
