/// Application-level constants
pub const APP_NAME: &str = "HealthBox";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address for the HTTP API.
/// Port 5000 is what existing frontends expect.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Environment variable overriding the bind address.
pub const BIND_ADDR_ENV: &str = "HEALTHBOX_ADDR";

/// Resolve the socket address to bind.
pub fn bind_addr() -> String {
    std::env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info,tower_http=warn", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_uses_expected_port() {
        assert!(DEFAULT_BIND_ADDR.ends_with(":5000"));
    }

    #[test]
    fn default_log_filter_scopes_to_crate() {
        let filter = default_log_filter();
        assert!(filter.contains("healthbox=info"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
