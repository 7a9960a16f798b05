use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub struct InvalidUriError(String);

impl InvalidUriError {
    pub fn reason(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for InvalidUriError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<http::uri::InvalidUri> for InvalidUriError {
    fn from(value: http::uri::InvalidUri) -> Self {
        InvalidUriError(value.to_string())
    }
}

impl From<http::uri::InvalidUriParts> for InvalidUriError {
    fn from(value: http::uri::InvalidUriParts) -> Self {
        InvalidUriError(value.to_string())
    }
}

/// A validated absolute URI for addressing the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(http::Uri);

impl Uri {
    pub fn new(uri: http::Uri) -> Self {
        Self(uri)
    }

    pub fn from_static(src: &'static str) -> Self {
        Self(http::Uri::from_static(src))
    }

    /// Build a URI from a base origin and a path, replacing whatever path
    /// and query the base carried.
    pub fn from_parts(
        base_uri: Uri,
        path: &str,
        query: Option<&str>,
    ) -> Result<Self, InvalidUriError> {
        let path_and_query = if let Some(qs) = query {
            http::uri::PathAndQuery::from_maybe_shared(format!("{path}?{qs}",))?
        } else {
            http::uri::PathAndQuery::from_str(path)?
        };
        let mut parts = base_uri.0.into_parts();
        parts.path_and_query = Some(path_and_query);

        Ok(http::Uri::from_parts(parts).map(Self::new)?)
    }
}

impl Display for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Uri {
    type Err = InvalidUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(http::Uri::from_str(s).map(Self::new)?)
    }
}

impl TryFrom<String> for Uri {
    type Error = InvalidUriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(http::Uri::from_maybe_shared(value)?))
    }
}

impl From<http::Uri> for Uri {
    fn from(value: http::Uri) -> Self {
        Self(value)
    }
}

impl From<Uri> for http::Uri {
    fn from(value: Uri) -> Self {
        value.0
    }
}
