// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use launchdesk_client::{Keywords, LaunchRecord, MediaObject, SeoRecord};
use launchdesk_core::Config;

/// Creates a normalized configuration pointing at the given API URL.
///
/// # Example
///
/// ```ignore
/// let config = test_config("http://127.0.0.1:3000");
/// ```
#[must_use]
pub fn test_config(api_base_url: &str) -> Config {
    let mut config = Config {
        api_base_url: api_base_url.to_string(),
        asset_base_url: "https://cdn.example.com".to_string(),
        timeout_secs: 5,
        launches_path: None,
        seo_path: None,
    };
    config.normalize().expect("test config should be valid");
    config
}

/// Creates a media object with a fixed modification time.
#[must_use]
pub fn media_object(key: &str) -> MediaObject {
    MediaObject {
        key: key.into(),
        last_modified: Some("2024-05-01T10:00:00.000Z".to_string()),
        launch_name: None,
    }
}

/// Creates a launch record.
#[must_use]
pub fn launch_record(id: &str, launch_date: &str, end_date: &str) -> LaunchRecord {
    LaunchRecord {
        id: id.to_string(),
        launch_name: format!("Launch {id}"),
        launch_date: launch_date.to_string(),
        end_date: end_date.to_string(),
    }
}

/// Creates an SEO record with list keywords.
#[must_use]
pub fn seo_record(launch_id: &str, title: &str, keywords: &[&str]) -> SeoRecord {
    SeoRecord {
        launch_id: launch_id.to_string(),
        title: title.to_string(),
        description: String::new(),
        social_image: None,
        keywords: Some(Keywords::List(
            keywords.iter().map(|k| (*k).to_string()).collect(),
        )),
    }
}
