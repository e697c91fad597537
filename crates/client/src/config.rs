//! Gateway configuration.

/// Default backend base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "MILIEU_API_URL";

/// Connection settings for the gateway.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// Uses `MILIEU_API_URL`, falling back to the default if not set.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE_URL);
    }
}
