// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Backend API configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    /// Path of the launch collection endpoint.
    #[serde(default = "default_launches_path")]
    pub launches_path: String,
    /// Path of the SEO settings collection endpoint.
    #[serde(default = "default_seo_path")]
    pub seo_path: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with defaults for everything else.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

const fn default_timeout() -> u64 {
    30
}

fn default_launches_path() -> String {
    "/launch".to_string()
}

fn default_seo_path() -> String {
    "/seo".to_string()
}

fn default_user_agent() -> String {
    concat!("launchdesk-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            launches_path: default_launches_path(),
            seo_path: default_seo_path(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
