use std::env;
use std::time::Duration;

/// Runtime configuration, sourced from the environment with defaults
/// that point at a local backend.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the assistant backend
    pub api_base_url: String,
    /// Pre-provisioned bearer token; commands skip login when set
    pub token: Option<String>,
    /// Per-request timeout for HTTP calls, in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_base_url = env::var("SAP_ASSIST_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let token = env::var("SAP_ASSIST_TOKEN").ok();
        let request_timeout_secs = env::var("SAP_ASSIST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            api_base_url,
            token,
            request_timeout_secs,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        unsafe {
            env::remove_var("SAP_ASSIST_API_URL");
            env::remove_var("SAP_ASSIST_TOKEN");
            env::remove_var("SAP_ASSIST_TIMEOUT_SECS");
        }

        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.token, None);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_reads_env_overrides() {
        unsafe {
            env::set_var("SAP_ASSIST_API_URL", "https://assist.example.com/");
            env::set_var("SAP_ASSIST_TOKEN", "temporary_test_token");
            env::set_var("SAP_ASSIST_TIMEOUT_SECS", "5");
        }

        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://assist.example.com/");
        assert_eq!(config.token, Some("temporary_test_token".to_string()));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));

        unsafe {
            env::remove_var("SAP_ASSIST_API_URL");
            env::remove_var("SAP_ASSIST_TOKEN");
            env::remove_var("SAP_ASSIST_TIMEOUT_SECS");
        }
    }

    #[test]
    #[serial]
    fn test_unparseable_timeout_falls_back() {
        unsafe {
            env::set_var("SAP_ASSIST_TIMEOUT_SECS", "not-a-number");
        }

        let config = AppConfig::default();
        assert_eq!(config.request_timeout_secs, 30);

        unsafe {
            env::remove_var("SAP_ASSIST_TIMEOUT_SECS");
        }
    }
}
