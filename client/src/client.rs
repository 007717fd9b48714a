// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Backend client for media, launch and SEO operations.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::types::{DeleteMediaRequest, LaunchDates, LaunchRecord, MediaObject, SeoRecord};

/// Client for the landing-page CMS backend.
///
/// # Example
///
/// ```ignore
/// use launchdesk_client::{ApiClient, ClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ClientConfig::new("https://api.example.com"))?;
/// for media in client.list_media().await? {
///     println!("{}", media.key);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a new backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or HTTP client initialization fails.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Lists every uploaded media object.
    ///
    /// A body that is not a JSON array is treated as an empty listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or an entry cannot be decoded.
    pub async fn list_media(&self) -> Result<Vec<MediaObject>, ClientError> {
        tracing::debug!("fetching media list");
        let value: serde_json::Value = self.get_json("/media/list").await?;
        match value {
            serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
            other => {
                tracing::warn!(kind = json_kind(&other), "media list is not an array");
                Ok(Vec::new())
            }
        }
    }

    /// Deletes one media object.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn delete_media(&self, key: &str) -> Result<(), ClientError> {
        tracing::debug!(key, "deleting media");
        let req = self
            .http
            .build_request(Method::DELETE, "/media")
            .json(&DeleteMediaRequest { key });
        self.http.execute(req).await?;
        Ok(())
    }

    /// Fetches the launch window of one launch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the launch does not exist.
    pub async fn get_launch(&self, launch_id: &str) -> Result<LaunchDates, ClientError> {
        tracing::debug!(launch_id, "fetching launch");
        self.get_json(&format!("/launch/{launch_id}")).await
    }

    /// Lists all launches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn list_launches(&self) -> Result<Vec<LaunchRecord>, ClientError> {
        tracing::debug!("fetching launches");
        self.get_json(&self.config.launches_path).await
    }

    /// Lists the SEO settings of all launches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn list_seo_settings(&self) -> Result<Vec<SeoRecord>, ClientError> {
        tracing::debug!("fetching seo settings");
        self.get_json(&self.config.seo_path).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, path))
            .await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
