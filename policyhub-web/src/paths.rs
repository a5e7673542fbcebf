//! Compile-time deployment settings.
//!
//! `POLICY_API_URL` points the client at the API server and `PUBLIC_URL`
//! sets the router base path when the app is hosted under a subdirectory.

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Base URL of the PolicyHub API, without a trailing slash.
#[must_use]
pub fn api_base() -> String {
    api_base_with(option_env!("POLICY_API_URL"))
}

/// Base path for the router (e.g., `/policies` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn api_base_with(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_defaults_to_localhost() {
        assert_eq!(api_base_with(None), "http://localhost:5000");
        assert_eq!(api_base_with(Some("  ")), "http://localhost:5000");
    }

    #[test]
    fn api_base_trims_trailing_slashes() {
        assert_eq!(
            api_base_with(Some("https://api.example.edu/")),
            "https://api.example.edu"
        );
    }

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("https://api.example.edu/", "/policies/all"),
            "https://api.example.edu/policies/all"
        );
        assert_eq!(
            join_url("https://api.example.edu", "auth/login"),
            "https://api.example.edu/auth/login"
        );
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(router_base_with_base("/board/"), Some(String::from("/board")));
        assert_eq!(router_base_with_base(""), None);
    }
}
