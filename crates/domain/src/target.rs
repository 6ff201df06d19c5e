//! Verification target addressing.
//!
//! A `Target` is the validated base URL of the API under verification,
//! plus builders for the endpoint URLs the scenarios hit.

use url::Url;

use crate::error::{DomainError, DomainResult};

/// The remote API under verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    base: Url,
}

impl Target {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBaseUrl` when the URL does not parse
    /// and `DomainError::UnsupportedScheme` for non-HTTP(S) schemes.
    pub fn new(base_url: &str) -> DomainResult<Self> {
        let base =
            Url::parse(base_url).map_err(|e| DomainError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(DomainError::UnsupportedScheme(base.scheme().to_string()));
        }

        Ok(Self { base })
    }

    /// Returns the base URL without any trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Returns the API root URL (`<base>/api`).
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}/api", self.base())
    }

    /// Returns the contacts collection URL (`<base>/api/contacts`).
    #[must_use]
    pub fn contacts(&self) -> String {
        format!("{}/api/contacts", self.base())
    }

    /// Returns the URL for an arbitrary path under the base URL.
    ///
    /// `path` must start with `/`.
    #[must_use]
    pub fn route(&self, path: &str) -> String {
        format!("{}{path}", self.base())
    }
}
