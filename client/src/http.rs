// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with status handling.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP client for backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or HTTP client creation fails.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Config("base URL is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Builds a request against a path relative to the base URL.
    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.full_url(path))
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req.send().await?;

        match resp.status() {
            status if status.is_success() => Ok(resp),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(resp.url().path().to_string())),
            status => {
                let body = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(ClientError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    fn full_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_with_exactly_one_slash() {
        let http = HttpClient::new(&ClientConfig::new("http://api.local/")).unwrap();
        assert_eq!(http.full_url("/media/list"), "http://api.local/media/list");
        assert_eq!(http.full_url("launch/42"), "http://api.local/launch/42");
    }

    #[test]
    fn rejects_empty_base_url() {
        let err = HttpClient::new(&ClientConfig::new(" / ")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
