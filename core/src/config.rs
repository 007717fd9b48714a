// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use launchdesk_client::ClientConfig;

/// The name of the Launchdesk application.
pub const APP_NAME: &str = "launchdesk";

/// Configuration for the Launchdesk application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Base URL of the CMS backend API.
    #[serde(default)]
    pub api_base_url: String,

    /// Base URL under which uploaded media objects are served.
    #[serde(default)]
    pub asset_base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Path of the launch collection endpoint.
    #[serde(default)]
    pub launches_path: Option<String>,

    /// Path of the SEO settings collection endpoint.
    #[serde(default)]
    pub seo_path: Option<String>,
}

impl Config {
    /// Normalize the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the base URLs is missing.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.api_base_url = normalize_url(&self.api_base_url)
            .ok_or("api_base_url must be set in the [core] section")?;

        self.asset_base_url = normalize_url(&self.asset_base_url)
            .ok_or("asset_base_url must be set in the [core] section")?;

        if self.timeout_secs == 0 {
            tracing::warn!("timeout_secs is 0, falling back to the default");
            self.timeout_secs = default_timeout();
        }

        Ok(())
    }

    /// Builds the backend client configuration.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.api_base_url.clone());
        config.timeout_secs = self.timeout_secs;
        if let Some(path) = &self.launches_path {
            config.launches_path.clone_from(path);
        }
        if let Some(path) = &self.seo_path {
            config.seo_path.clone_from(path);
        }
        config
    }
}

const fn default_timeout() -> u64 {
    30
}

fn normalize_url(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    (!url.is_empty()).then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Config {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn strips_trailing_slashes() {
        let mut config = parse(
            r#"
api_base_url = "https://api.example.com/"
asset_base_url = " https://assets.example.com// "
"#,
        );
        config.normalize().unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.asset_base_url, "https://assets.example.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn rejects_missing_urls() {
        let mut config = parse(r#"asset_base_url = "https://assets.example.com""#);
        let err = config.normalize().unwrap_err();
        assert!(err.to_string().contains("api_base_url"));

        let mut config = parse(r#"api_base_url = "https://api.example.com""#);
        let err = config.normalize().unwrap_err();
        assert!(err.to_string().contains("asset_base_url"));
    }

    #[test]
    fn client_config_carries_endpoint_overrides() {
        let mut config = parse(
            r#"
api_base_url = "https://api.example.com"
asset_base_url = "https://assets.example.com"
timeout_secs = 5
launches_path = "/launches"
"#,
        );
        config.normalize().unwrap();

        let client = config.client_config();
        assert_eq!(client.base_url, "https://api.example.com");
        assert_eq!(client.timeout_secs, 5);
        assert_eq!(client.launches_path, "/launches");
        assert_eq!(client.seo_path, "/seo");
    }
}
