// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use launchdesk_client::{ClientError, MediaObject, ObjectKey};

use crate::media::{MediaItem, MediaMatch};
use crate::notice::Notice;
use crate::overlay::DismissibleOverlay;
use crate::source::MediaSource;

/// Change event emitted when the user picks a media object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSelected {
    /// Key of the picked object.
    pub key: ObjectKey,
}

/// Searchable chooser over the uploaded media.
///
/// Every picker owns its own copy of the list and fetches it itself.
#[derive(Debug, Clone, Default)]
pub struct MediaPicker {
    items: Vec<MediaItem>,
    search: String,
    matcher: MediaMatch,
    overlay: DismissibleOverlay,
    selected: Option<ObjectKey>,
    notice: Option<Notice>,
}

impl MediaPicker {
    /// Creates an empty picker using the given search rule.
    #[must_use]
    pub fn new(matcher: MediaMatch) -> Self {
        Self {
            matcher,
            ..Default::default()
        }
    }

    /// Sets the initially selected key, e.g. when editing an existing section.
    #[must_use]
    pub fn with_selected(mut self, key: Option<ObjectKey>) -> Self {
        self.selected = key;
        self
    }

    /// Fetches the media list from the source and applies it.
    pub async fn refresh<S: MediaSource + ?Sized>(&mut self, source: &S) {
        let result = source.list_media().await;
        self.apply_load(result);
    }

    /// Applies a finished load.
    ///
    /// A failed load keeps the current list and raises a notice.
    pub fn apply_load(&mut self, result: Result<Vec<MediaObject>, ClientError>) {
        match result {
            Ok(objects) => {
                tracing::debug!(count = objects.len(), "media list loaded");
                self.items = objects.into_iter().map(MediaItem::from).collect();
                self.notice = None;
            }
            Err(e) => {
                tracing::error!("failed to fetch media list: {e}");
                self.notice = Some(Notice::FetchMediaFailed);
            }
        }
    }

    /// Items matching the current search term, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| self.matcher.matches(item, &self.search))
            .collect()
    }

    /// All loaded items.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Replaces the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// The current search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The search rule.
    #[must_use]
    pub const fn matcher(&self) -> MediaMatch {
        self.matcher
    }

    /// Picks a loaded item and closes the overlay.
    ///
    /// Returns `None` if no loaded item has that key.
    pub fn select(&mut self, key: &str) -> Option<MediaSelected> {
        let item = self.items.iter().find(|item| item.key.as_str() == key)?;
        let key = item.key.clone();
        tracing::debug!(%key, "media selected");
        self.selected = Some(key.clone());
        self.overlay.close();
        Some(MediaSelected { key })
    }

    /// The currently selected key.
    #[must_use]
    pub fn selected(&self) -> Option<&ObjectKey> {
        self.selected.as_ref()
    }

    /// The notice raised by the last load, if it failed.
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// The overlay the picker is shown in.
    #[must_use]
    pub const fn overlay(&self) -> &DismissibleOverlay {
        &self.overlay
    }

    /// Mutable access to the overlay.
    pub fn overlay_mut(&mut self) -> &mut DismissibleOverlay {
        &mut self.overlay
    }
}
