// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use launchdesk_core::{APP_NAME, Config as CoreConfig};

const LAUNCHDESK_CONFIG_ENV: &str = "LAUNCHDESK_CONFIG";
const LAUNCHDESK_DEV_ENV: &str = "LAUNCHDESK_DEV";
const LAUNCHDESK_API_URL_ENV: &str = "LAUNCHDESK_API_URL";
const LAUNCHDESK_ASSET_URL_ENV: &str = "LAUNCHDESK_ASSET_URL";

const LAUNCHDESK_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const LAUNCHDESK_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(LAUNCHDESK_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({LAUNCHDESK_DEV_ENV} is set): config must be explicitly specified via --config or {LAUNCHDESK_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let mut core = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?
        .core;

    apply_env_overrides(&mut core);
    core.normalize()?;
    Ok(core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn apply_env_overrides(core: &mut CoreConfig) {
    if let Ok(url) = std::env::var(LAUNCHDESK_API_URL_ENV) {
        tracing::debug!(url, "api_base_url overridden from environment");
        core.api_base_url = url;
    }
    if let Ok(url) = std::env::var(LAUNCHDESK_ASSET_URL_ENV) {
        tracing::debug!(url, "asset_base_url overridden from environment");
        core.asset_base_url = url;
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(LAUNCHDESK_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if LAUNCHDESK_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if LAUNCHDESK_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            LAUNCHDESK_DEV_ENV,
            val,
            LAUNCHDESK_DEV_VALID_TRUE.join(", "),
            LAUNCHDESK_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
