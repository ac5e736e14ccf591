use crate::core::config::data::Config;
use crate::utils::url::endpoint_url;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ENDPOINT: &str = "chat";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable consulted when no base URL is given on the command line.
pub const BASE_URL_ENV: &str = "PODIUM_BASE_URL";

impl Config {
    /// Base URL by precedence: command line, environment, config file, default.
    pub fn resolve_base_url(&self, cli_base_url: Option<&str>) -> String {
        self.resolve_base_url_with_env(cli_base_url, std::env::var(BASE_URL_ENV).ok())
    }

    pub(crate) fn resolve_base_url_with_env(
        &self,
        cli_base_url: Option<&str>,
        env_base_url: Option<String>,
    ) -> String {
        cli_base_url
            .map(str::to_string)
            .or(env_base_url)
            .or_else(|| self.base_url.clone())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn chat_url(&self, cli_base_url: Option<&str>) -> String {
        endpoint_url(&self.resolve_base_url(cli_base_url), self.endpoint_or_default())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
