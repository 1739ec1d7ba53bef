use std::fmt;
use std::str::FromStr;

use http::Method;

use crate::error::RouteError;

/// The fixed set of methods a [`Router`](crate::Router) keeps a table for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl RouteMethod {
    pub const ALL: [RouteMethod; 7] = [
        RouteMethod::Get,
        RouteMethod::Post,
        RouteMethod::Put,
        RouteMethod::Delete,
        RouteMethod::Patch,
        RouteMethod::Options,
        RouteMethod::Head,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_method(self) -> Method {
        match self {
            RouteMethod::Get => Method::GET,
            RouteMethod::Post => Method::POST,
            RouteMethod::Put => Method::PUT,
            RouteMethod::Delete => Method::DELETE,
            RouteMethod::Patch => Method::PATCH,
            RouteMethod::Options => Method::OPTIONS,
            RouteMethod::Head => Method::HEAD,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Delete => "DELETE",
            RouteMethod::Patch => "PATCH",
            RouteMethod::Options => "OPTIONS",
            RouteMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method names are case-sensitive, `get` is not `GET`.
impl FromStr for RouteMethod {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteMethod::ALL.into_iter().find(|method| method.as_str() == s).ok_or_else(|| RouteError::unsupported_method(s))
    }
}

impl TryFrom<&Method> for RouteMethod {
    type Error = RouteError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

impl From<RouteMethod> for Method {
    fn from(method: RouteMethod) -> Self {
        method.as_method()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_supported_methods() {
        for method in RouteMethod::ALL {
            assert_eq!(method.as_str().parse::<RouteMethod>(), Ok(method));
            assert_eq!(RouteMethod::try_from(&method.as_method()), Ok(method));
        }
    }

    #[test]
    fn reject_unsupported_methods() {
        assert_eq!(RouteMethod::try_from(&Method::TRACE), Err(RouteError::unsupported_method("TRACE")));
        assert_eq!(RouteMethod::try_from(&Method::CONNECT), Err(RouteError::unsupported_method("CONNECT")));
        assert!("get".parse::<RouteMethod>().is_err());
        assert!("".parse::<RouteMethod>().is_err());
    }

    #[test]
    fn index_is_dense() {
        for (expected, method) in RouteMethod::ALL.into_iter().enumerate() {
            assert_eq!(method.index(), expected);
        }
    }
}
