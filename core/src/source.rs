// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use launchdesk_client::{
    ApiClient, ClientError, LaunchDates, LaunchRecord, MediaObject, ObjectKey, SeoRecord,
};

/// Where media objects come from and are deleted.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Lists every media object.
    async fn list_media(&self) -> Result<Vec<MediaObject>, ClientError>;

    /// Deletes one media object.
    async fn delete_media(&self, key: &ObjectKey) -> Result<(), ClientError>;
}

/// Where launches and their SEO settings come from.
#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Fetches the launch window of one launch.
    async fn get_launch(&self, launch_id: &str) -> Result<LaunchDates, ClientError>;

    /// Lists all launches.
    async fn list_launches(&self) -> Result<Vec<LaunchRecord>, ClientError>;

    /// Lists the SEO settings of all launches.
    async fn list_seo_settings(&self) -> Result<Vec<SeoRecord>, ClientError>;
}

#[async_trait]
impl MediaSource for ApiClient {
    async fn list_media(&self) -> Result<Vec<MediaObject>, ClientError> {
        ApiClient::list_media(self).await
    }

    async fn delete_media(&self, key: &ObjectKey) -> Result<(), ClientError> {
        ApiClient::delete_media(self, key).await
    }
}

#[async_trait]
impl LaunchSource for ApiClient {
    async fn get_launch(&self, launch_id: &str) -> Result<LaunchDates, ClientError> {
        ApiClient::get_launch(self, launch_id).await
    }

    async fn list_launches(&self) -> Result<Vec<LaunchRecord>, ClientError> {
        ApiClient::list_launches(self).await
    }

    async fn list_seo_settings(&self) -> Result<Vec<SeoRecord>, ClientError> {
        ApiClient::list_seo_settings(self).await
    }
}
