// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Storage object name of an uploaded media file.
///
/// An `ObjectKey` identifies a media object in the asset bucket, such as
/// `spring-launch/hero.webp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Creates a new `ObjectKey` from a string.
    #[must_use]
    pub const fn new(key: String) -> Self {
        Self(key)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ObjectKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ObjectKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ObjectKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// One entry of `GET /media/list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaObject {
    /// Storage object name.
    #[serde(rename = "Key")]
    pub key: ObjectKey,

    /// Last modification time as reported by the storage backend.
    #[serde(rename = "LastModified", default)]
    pub last_modified: Option<String>,

    /// Name of the launch the media was uploaded for, if any.
    #[serde(rename = "launchName", default)]
    pub launch_name: Option<String>,
}

/// Body of `DELETE /media`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteMediaRequest<'a> {
    /// Storage object name to delete.
    pub key: &'a str,
}

/// Response of `GET /launch/{id}`, dates in `DD.MM.YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDates {
    /// First day of the launch.
    pub launch_date: String,
    /// Last day of the launch.
    pub end_date: String,
}

/// One entry of the launch collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    /// Launch identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name of the launch.
    #[serde(default)]
    pub launch_name: String,
    /// First day of the launch, `DD.MM.YYYY`.
    pub launch_date: String,
    /// Last day of the launch, `DD.MM.YYYY`.
    pub end_date: String,
}

/// Per-launch SEO metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoRecord {
    /// Identifier of the launch this record belongs to.
    pub launch_id: String,
    /// Page title.
    #[serde(default)]
    pub title: String,
    /// Page description.
    #[serde(default)]
    pub description: String,
    /// Object key of the social sharing image.
    #[serde(default)]
    pub social_image: Option<String>,
    /// Search keywords.
    #[serde(default)]
    pub keywords: Option<Keywords>,
}

/// SEO keywords, stored either as a list or as one free-form string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    /// A list of keywords.
    List(Vec<String>),
    /// A single free-form keyword string.
    Text(String),
}
