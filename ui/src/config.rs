//! API base URL configuration
//!
//! The base URL is injected, never hardcoded. Sources, first valid wins:
//! 1. `localStorage["octofit.api_base"]` (runtime override)
//! 2. `OCTOFIT_API_BASE` at build time
//! 3. same-origin relative paths

use gloo_storage::{LocalStorage, Storage};
use octofit_shared::ApiBase;

/// localStorage key holding a runtime base URL override
pub const STORAGE_KEY: &str = "octofit.api_base";

/// Base URL baked in at build time, if any
pub const BUILD_BASE: Option<&str> = option_env!("OCTOFIT_API_BASE");

/// Pick the first valid base URL among the configured sources
pub fn resolve_base(stored: Option<&str>, build: Option<&str>) -> ApiBase {
    let sources = [("localStorage", stored), ("OCTOFIT_API_BASE", build)];

    for (source, candidate) in sources {
        let Some(candidate) = candidate else {
            continue;
        };
        match ApiBase::parse(candidate) {
            Ok(base) => return base,
            Err(e) => tracing::warn!("Ignoring {} base URL: {}", source, e),
        }
    }

    ApiBase::relative()
}

/// Resolve the base URL from the browser environment
pub fn base_from_environment() -> ApiBase {
    let stored = LocalStorage::raw().get_item(STORAGE_KEY).ok().flatten();
    let base = resolve_base(stored.as_deref(), BUILD_BASE);
    tracing::info!("Using API base {}", base);
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_override_wins() {
        let base = resolve_base(Some("https://api.octofit.dev/"), Some("http://localhost:8000"));
        assert_eq!(base.as_str(), "https://api.octofit.dev");
    }

    #[test]
    fn test_build_base_used_without_override() {
        let base = resolve_base(None, Some("http://localhost:8000"));
        assert_eq!(base.as_str(), "http://localhost:8000");
    }

    #[test]
    fn test_invalid_sources_fall_through() {
        let base = resolve_base(Some("not a url"), Some("http://localhost:8000"));
        assert_eq!(base.as_str(), "http://localhost:8000");

        let base = resolve_base(Some("not a url"), Some("ftp://nope"));
        assert!(base.is_relative());
    }

    #[test]
    fn test_defaults_to_same_origin() {
        assert!(resolve_base(None, None).is_relative());
    }
}
