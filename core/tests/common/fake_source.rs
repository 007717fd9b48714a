// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory backend for integration tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use launchdesk_client::{
    ClientError, LaunchDates, LaunchRecord, MediaObject, ObjectKey, SeoRecord,
};
use launchdesk_core::{LaunchSource, MediaSource};

/// A backend that serves canned data and records delete calls.
#[derive(Debug, Default)]
pub struct FakeSource {
    media: Mutex<Vec<MediaObject>>,
    launches: Vec<LaunchRecord>,
    seo: Vec<SeoRecord>,
    failing_deletes: HashSet<String>,
    fail_listing: bool,
    delete_calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSource {
    /// Creates a backend holding the given media.
    #[must_use]
    pub fn with_media(media: Vec<MediaObject>) -> Self {
        Self {
            media: Mutex::new(media),
            ..Default::default()
        }
    }

    /// Creates a backend holding the given launches and SEO settings.
    #[must_use]
    pub fn with_launches(launches: Vec<LaunchRecord>, seo: Vec<SeoRecord>) -> Self {
        Self {
            launches,
            seo,
            ..Default::default()
        }
    }

    /// Makes deletes of the given key fail.
    #[must_use]
    pub fn fail_delete_of(mut self, key: &str) -> Self {
        self.failing_deletes.insert(key.to_string());
        self
    }

    /// Makes every listing fail.
    #[must_use]
    pub fn fail_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Keys passed to `delete_media`, in call order.
    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    /// Keys still stored.
    pub fn stored_keys(&self) -> Vec<String> {
        self.media
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.key.to_string())
            .collect()
    }
}

#[async_trait]
impl MediaSource for FakeSource {
    async fn list_media(&self) -> Result<Vec<MediaObject>, ClientError> {
        if self.fail_listing {
            return Err(ClientError::Http("connection refused".to_string()));
        }
        Ok(self.media.lock().unwrap().clone())
    }

    async fn delete_media(&self, key: &ObjectKey) -> Result<(), ClientError> {
        self.delete_calls.lock().unwrap().push(key.to_string());
        if self.failing_deletes.contains(key.as_str()) {
            return Err(ClientError::Status {
                status: 500,
                body: "storage error".to_string(),
            });
        }
        self.media.lock().unwrap().retain(|m| &m.key != key);
        Ok(())
    }
}

#[async_trait]
impl LaunchSource for FakeSource {
    async fn get_launch(&self, launch_id: &str) -> Result<LaunchDates, ClientError> {
        if self.fail_listing {
            return Err(ClientError::Http("connection refused".to_string()));
        }
        self.launches
            .iter()
            .find(|l| l.id == launch_id)
            .map(|l| LaunchDates {
                launch_date: l.launch_date.clone(),
                end_date: l.end_date.clone(),
            })
            .ok_or_else(|| ClientError::NotFound(format!("/launch/{launch_id}")))
    }

    async fn list_launches(&self) -> Result<Vec<LaunchRecord>, ClientError> {
        if self.fail_listing {
            return Err(ClientError::Http("connection refused".to_string()));
        }
        Ok(self.launches.clone())
    }

    async fn list_seo_settings(&self) -> Result<Vec<SeoRecord>, ClientError> {
        if self.fail_listing {
            return Err(ClientError::Http("connection refused".to_string()));
        }
        Ok(self.seo.clone())
    }
}
