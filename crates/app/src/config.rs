//! Runtime configuration.
//!
//! The verification target has a compiled-in default and may be
//! overridden through the environment; there are no command-line flags.

use apiprobe_domain::{DomainResult, Target};

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://sanjay-portfolio-2.preview.emergentagent.com";

/// Environment variable overriding the verification target.
pub const BASE_URL_ENV: &str = "APIPROBE_BASE_URL";

/// Resolves the verification target from the environment.
///
/// # Errors
///
/// Returns a domain error when the configured base URL is malformed or
/// uses a non-HTTP(S) scheme.
pub fn target_from_env() -> DomainResult<Target> {
    let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    Target::new(&base_url)
}
