//! API base URL resolution
//!
//! Every request URL is `<base><path>`. An empty base means same-origin
//! relative paths; otherwise the base is an absolute http(s) origin,
//! optionally with a path prefix.

use std::fmt;

use crate::resources::ResourceKind;

/// Rejected base URL
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BaseUrlError {
    #[error("Base URL must start with http:// or https://, got '{0}'")]
    UnsupportedScheme(String),

    #[error("Base URL has no host: '{0}'")]
    MissingHost(String),
}

/// Prefix prepended to every API path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiBase {
    base_url: String,
}

impl ApiBase {
    /// Same-origin relative requests (`/api/teams`)
    pub fn relative() -> Self {
        Self::default()
    }

    /// Parse a configured base URL
    ///
    /// Surrounding whitespace and trailing slashes are removed. A blank value
    /// yields the relative base.
    pub fn parse(url: &str) -> Result<Self, BaseUrlError> {
        let value = url.trim();
        let trimmed = value.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::relative());
        }

        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"))
            .ok_or_else(|| BaseUrlError::UnsupportedScheme(value.to_string()))?;

        if rest.trim_end_matches('/').is_empty() || rest.starts_with('/') {
            return Err(BaseUrlError::MissingHost(value.to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn is_relative(&self) -> bool {
        self.base_url.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a collection endpoint
    pub fn endpoint(&self, kind: ResourceKind) -> String {
        format!("{}{}", self.base_url, kind.path())
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_relative() {
            f.write_str("(same origin)")
        } else {
            f.write_str(&self.base_url)
        }
    }
}

impl std::str::FromStr for ApiBase {
    type Err = BaseUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
