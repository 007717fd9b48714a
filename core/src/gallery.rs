// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use jiff::tz::TimeZone;
use launchdesk_client::{MediaObject, ObjectKey};

use crate::media::{self, MediaItem, MediaKind};
use crate::notice::Notice;
use crate::source::MediaSource;

/// One row of the gallery table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRow {
    /// Display ordinal, `DL1`, `DL2`, ... over the visible rows.
    pub ordinal: String,

    /// Storage key.
    pub key: ObjectKey,

    /// Key up to the first `.`.
    pub name: String,

    /// Upper-cased text after the last `.`.
    pub file_type: String,

    /// Upload day, in UTC.
    pub date: Option<Date>,

    /// Whether the row is part of the bulk selection.
    pub selected: bool,
}

/// Result of a bulk delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeleteReport {
    /// Keys deleted, in request order.
    pub deleted: Vec<ObjectKey>,

    /// The key whose delete failed and stopped the run.
    pub failed_at: Option<ObjectKey>,
}

impl BulkDeleteReport {
    /// Whether every requested delete succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed_at.is_none()
    }
}

/// The media gallery: listing, search, selection and deletion.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<MediaItem>,
    search: String,
    selecting: bool,
    selected: Vec<ObjectKey>,
    notice: Option<Notice>,
    asset_base_url: String,
}

impl Gallery {
    /// Creates an empty gallery serving assets from the given base URL.
    #[must_use]
    pub fn new(asset_base_url: impl Into<String>) -> Self {
        Self {
            asset_base_url: asset_base_url.into(),
            ..Default::default()
        }
    }

    /// Fetches the media list from the source.
    ///
    /// A failed fetch keeps the current items and raises a notice.
    pub async fn refresh<S: MediaSource + ?Sized>(&mut self, source: &S) {
        let result = source.list_media().await;
        match result {
            Ok(objects) => self.set_items(objects),
            Err(e) => {
                tracing::error!("failed to fetch media list: {e}");
                self.notice = Some(Notice::FetchMediaFailed);
            }
        }
    }

    /// Replaces the items.
    pub fn set_items(&mut self, objects: Vec<MediaObject>) {
        self.items = objects.into_iter().map(MediaItem::from).collect();
        self.selected.retain(|key| self.items.iter().any(|i| &i.key == key));
        self.notice = None;
    }

    /// All items.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Sets the key search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// The key search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Items whose key contains the search term, case-insensitively.
    pub fn visible(&self) -> impl Iterator<Item = &MediaItem> {
        let term = self.search.to_lowercase();
        self.items
            .iter()
            .filter(move |item| item.key.to_lowercase().contains(&term))
    }

    /// Table rows for the visible items.
    #[must_use]
    pub fn rows(&self) -> Vec<GalleryRow> {
        self.visible()
            .enumerate()
            .map(|(i, item)| GalleryRow {
                ordinal: format!("DL{}", i + 1),
                key: item.key.clone(),
                name: item.key.split('.').next().unwrap_or_default().to_string(),
                file_type: item.key.rsplit('.').next().unwrap_or_default().to_uppercase(),
                date: item
                    .last_modified
                    .map(|ts| ts.to_zoned(TimeZone::UTC).date()),
                selected: self.is_selected(&item.key),
            })
            .collect()
    }

    /// Public URL of a key.
    #[must_use]
    pub fn asset_url(&self, key: &str) -> String {
        media::asset_url(&self.asset_base_url, key)
    }

    /// The preview kind and URL of a key, for the view dialog.
    #[must_use]
    pub fn preview(&self, key: &str) -> (MediaKind, String) {
        (MediaKind::of(key), self.asset_url(key))
    }

    /// Turns selection mode on or off. Turning it off clears the selection.
    pub fn toggle_selection_mode(&mut self) {
        self.selecting = !self.selecting;
        if !self.selecting {
            self.selected.clear();
        }
    }

    /// Whether selection mode is on.
    #[must_use]
    pub const fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Adds the key to the selection, or removes it if already selected.
    pub fn toggle(&mut self, key: &ObjectKey) {
        if let Some(i) = self.selected.iter().position(|k| k == key) {
            self.selected.remove(i);
        } else {
            self.selected.push(key.clone());
        }
    }

    /// Whether the key is selected.
    #[must_use]
    pub fn is_selected(&self, key: &ObjectKey) -> bool {
        self.selected.contains(key)
    }

    /// Selected keys in selection order.
    #[must_use]
    pub fn selected(&self) -> &[ObjectKey] {
        &self.selected
    }

    /// The notice raised by the last failed operation.
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Deletes one item.
    ///
    /// # Errors
    ///
    /// Returns [`Notice::DeleteFailed`] if the backend rejects the delete; the
    /// item is kept.
    pub async fn delete_one<S: MediaSource + ?Sized>(
        &mut self,
        source: &S,
        key: &ObjectKey,
    ) -> Result<(), Notice> {
        match source.delete_media(key).await {
            Ok(()) => {
                tracing::info!(%key, "media deleted");
                self.remove_local(key);
                Ok(())
            }
            Err(e) => {
                tracing::error!(%key, "failed to delete media: {e}");
                self.notice = Some(Notice::DeleteFailed);
                Err(Notice::DeleteFailed)
            }
        }
    }

    /// Deletes every selected item, one request at a time, in selection order.
    ///
    /// Each success is removed from the gallery right away. The first failure
    /// stops the run; the keys not yet deleted stay selected. After a full
    /// success the selection is cleared and selection mode ends.
    pub async fn delete_selected<S: MediaSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> BulkDeleteReport {
        let mut report = BulkDeleteReport::default();
        if self.selected.is_empty() {
            tracing::info!("bulk delete requested with nothing selected");
            self.notice = Some(Notice::NothingSelected);
            return report;
        }

        let keys = self.selected.clone();
        tracing::debug!(count = keys.len(), "bulk delete started");
        for key in keys {
            if let Err(e) = source.delete_media(&key).await {
                tracing::error!(%key, "bulk delete stopped: {e}");
                self.notice = Some(Notice::DeleteFailed);
                report.failed_at = Some(key);
                return report;
            }

            self.remove_local(&key);
            report.deleted.push(key);
        }

        self.selecting = false;
        self.notice = None;
        tracing::info!(count = report.deleted.len(), "bulk delete finished");
        report
    }

    fn remove_local(&mut self, key: &ObjectKey) {
        self.items.retain(|item| &item.key != key);
        self.selected.retain(|k| k != key);
    }
}
