//! API Configuration

/// Base URL used when `GAMERFEEDS_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "/api";

/// REST API base URL, fixed at build time, without a trailing slash
pub fn api_url() -> &'static str {
    option_env!("GAMERFEEDS_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_has_no_trailing_slash() {
        assert!(!api_url().ends_with('/'));
    }
}
