// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::Timestamp;
use launchdesk_client::{MediaObject, ObjectKey};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "avif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "avi", "mov", "mkv"];

/// How a media object is previewed, derived from its file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    /// Rendered as an image.
    Image,

    /// Rendered as a video with the given MIME type.
    Video {
        /// MIME type such as `video/mp4`.
        mime: String,
    },

    /// Not previewable.
    Unsupported {
        /// The lowercase extension, empty when the key has none.
        extension: String,
    },
}

impl MediaKind {
    /// Classifies a storage key by its extension, case-insensitively.
    #[must_use]
    pub fn of(key: &str) -> Self {
        let extension = extension(key).unwrap_or_default().to_lowercase();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Video {
                mime: format!("video/{extension}"),
            }
        } else {
            MediaKind::Unsupported { extension }
        }
    }

    /// The MIME type, known for videos only.
    #[must_use]
    pub fn mime(&self) -> Option<&str> {
        match self {
            MediaKind::Video { mime } => Some(mime),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => f.write_str("image"),
            MediaKind::Video { .. } => f.write_str("video"),
            MediaKind::Unsupported { .. } => f.write_str("unsupported"),
        }
    }
}

/// The text after the last `.` of a key, if there is one.
fn extension(key: &str) -> Option<&str> {
    key.rsplit_once('.').map(|(_, ext)| ext)
}

/// What a media search term is matched against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MediaMatch {
    /// The storage key only.
    #[default]
    Key,

    /// The storage key or the name of the launch the media belongs to.
    KeyOrLaunchName,
}

impl MediaMatch {
    /// Whether the item matches the term, case-insensitively.
    ///
    /// An empty term matches everything.
    #[must_use]
    pub fn matches(self, item: &MediaItem, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return true;
        }

        let contains = |s: &str| s.to_lowercase().contains(&term);
        match self {
            MediaMatch::Key => contains(item.key.as_str()),
            MediaMatch::KeyOrLaunchName => {
                contains(item.key.as_str()) || item.launch_name.as_deref().is_some_and(contains)
            }
        }
    }
}

/// An uploaded media object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Storage key, the identity of the item.
    pub key: ObjectKey,

    /// Last modification time, if the backend reported a parsable one.
    pub last_modified: Option<Timestamp>,

    /// Name of the launch the media was uploaded for.
    pub launch_name: Option<String>,
}

impl MediaItem {
    /// Creates an item with only a key.
    #[must_use]
    pub fn new(key: impl Into<ObjectKey>) -> Self {
        Self {
            key: key.into(),
            last_modified: None,
            launch_name: None,
        }
    }

    /// The preview kind of this item.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        MediaKind::of(&self.key)
    }
}

impl From<MediaObject> for MediaItem {
    fn from(obj: MediaObject) -> Self {
        let last_modified = obj.last_modified.as_deref().and_then(|s| match s.parse::<Timestamp>() {
            Ok(ts) => Some(ts),
            Err(e) => {
                tracing::warn!(key = %obj.key, value = s, "unparsable LastModified: {e}");
                None
            }
        });

        Self {
            key: obj.key,
            last_modified,
            launch_name: obj.launch_name,
        }
    }
}

/// The public URL of a media object.
#[must_use]
pub fn asset_url(asset_base_url: &str, key: &str) -> String {
    format!("{}/{}", asset_base_url.trim_end_matches('/'), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_images_case_insensitively() {
        for key in ["a.png", "b.JPG", "c.Jpeg", "dir/d.webp", "e.avif", "f.svg"] {
            assert_eq!(MediaKind::of(key), MediaKind::Image, "{key}");
        }
    }

    #[test]
    fn classifies_videos_with_mime() {
        assert_eq!(
            MediaKind::of("teaser.MP4"),
            MediaKind::Video {
                mime: "video/mp4".to_string()
            }
        );
        assert_eq!(MediaKind::of("clip.mov").mime(), Some("video/mov"));
    }

    #[test]
    fn falls_back_to_unsupported() {
        assert_eq!(
            MediaKind::of("notes.pdf"),
            MediaKind::Unsupported {
                extension: "pdf".to_string()
            }
        );
        assert_eq!(
            MediaKind::of("README"),
            MediaKind::Unsupported {
                extension: String::new()
            }
        );
        assert_eq!(
            MediaKind::of("trailing."),
            MediaKind::Unsupported {
                extension: String::new()
            }
        );
    }

    #[test]
    fn key_match_ignores_launch_name() {
        let item = MediaItem {
            launch_name: Some("Spring".to_string()),
            ..MediaItem::new("hero.png")
        };
        assert!(MediaMatch::Key.matches(&item, "HERO"));
        assert!(!MediaMatch::Key.matches(&item, "spring"));
        assert!(MediaMatch::KeyOrLaunchName.matches(&item, "spring"));
        assert!(MediaMatch::KeyOrLaunchName.matches(&item, ""));
    }

    #[test]
    fn converts_wire_objects() {
        let obj = MediaObject {
            key: "a.png".into(),
            last_modified: Some("2024-05-01T10:00:00.000Z".to_string()),
            launch_name: None,
        };
        let item = MediaItem::from(obj);
        assert_eq!(
            item.last_modified.map(|ts| ts.as_second()),
            Some(1_714_557_600)
        );

        let obj = MediaObject {
            key: "b.png".into(),
            last_modified: Some("yesterday".to_string()),
            launch_name: None,
        };
        assert_eq!(MediaItem::from(obj).last_modified, None);
    }

    #[test]
    fn joins_asset_url() {
        assert_eq!(
            asset_url("https://cdn.example.com/", "a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
