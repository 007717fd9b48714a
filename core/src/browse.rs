// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use launchdesk_client::{Keywords, LaunchRecord, SeoRecord};

use crate::launch::{Bucket, Launch};
use crate::notice::Notice;
use crate::source::LaunchSource;

/// A visible launch joined with its SEO settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchCard<'a> {
    /// The launch.
    pub launch: &'a Launch,

    /// Its SEO settings, if any were saved.
    pub seo: Option<&'a SeoRecord>,
}

/// Launch listing with bucket filters and SEO search.
#[derive(Debug, Clone, Default)]
pub struct LaunchBrowser {
    launches: Vec<Launch>,
    seo: Vec<SeoRecord>,
    bucket: Option<Bucket>,
    query: String,
    visible: Vec<usize>,
}

impl LaunchBrowser {
    /// Creates a browser showing every launch.
    ///
    /// Launches with malformed dates are skipped.
    #[must_use]
    pub fn new(launches: Vec<LaunchRecord>, seo: Vec<SeoRecord>) -> Self {
        let launches: Vec<Launch> = launches
            .into_iter()
            .filter_map(|record| {
                let id = record.id.clone();
                Launch::try_from(record)
                    .inspect_err(|e| tracing::warn!(launch_id = %id, "skipping launch: {e}"))
                    .ok()
            })
            .collect();

        let visible = (0..launches.len()).collect();
        Self {
            launches,
            seo,
            bucket: None,
            query: String::new(),
            visible,
        }
    }

    /// Loads launches and SEO settings from the source.
    ///
    /// # Errors
    ///
    /// Returns [`Notice::FetchLaunchFailed`] if either list cannot be fetched.
    pub async fn load<S: LaunchSource + ?Sized>(source: &S) -> Result<Self, Notice> {
        let launches = source.list_launches().await.map_err(|e| {
            tracing::error!("failed to fetch launches: {e}");
            Notice::FetchLaunchFailed
        })?;
        let seo = source.list_seo_settings().await.map_err(|e| {
            tracing::error!("failed to fetch seo settings: {e}");
            Notice::FetchLaunchFailed
        })?;
        Ok(Self::new(launches, seo))
    }

    /// Shows the launches in a bucket and remembers it.
    pub fn select_bucket(&mut self, bucket: Bucket, today: Date) {
        tracing::debug!(%bucket, "bucket selected");
        self.bucket = Some(bucket);
        self.show_bucket(Some(bucket), today);
    }

    /// Searches SEO keywords and titles.
    ///
    /// An empty query goes back to the remembered bucket, or to everything if
    /// no bucket was ever selected.
    pub fn search(&mut self, query: &str, today: Date) {
        self.query = query.to_string();
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            self.show_bucket(self.bucket, today);
            return;
        }

        self.visible = self
            .launches
            .iter()
            .enumerate()
            .filter(|(_, launch)| {
                self.seo_for(&launch.id)
                    .is_some_and(|seo| seo_matches(seo, &needle))
            })
            .map(|(i, _)| i)
            .collect();
    }

    /// The visible launches.
    pub fn visible(&self) -> impl Iterator<Item = &Launch> {
        self.visible.iter().filter_map(|&i| self.launches.get(i))
    }

    /// The visible launches joined with their SEO settings.
    #[must_use]
    pub fn cards(&self) -> Vec<LaunchCard<'_>> {
        self.visible()
            .map(|launch| LaunchCard {
                launch,
                seo: self.seo_for(&launch.id),
            })
            .collect()
    }

    /// The remembered bucket.
    #[must_use]
    pub const fn bucket(&self) -> Option<Bucket> {
        self.bucket
    }

    /// The last search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    fn show_bucket(&mut self, bucket: Option<Bucket>, today: Date) {
        self.visible = self
            .launches
            .iter()
            .enumerate()
            .filter(|(_, launch)| bucket.is_none_or(|b| b.matches(&launch.window, today)))
            .map(|(i, _)| i)
            .collect();
    }

    fn seo_for(&self, launch_id: &str) -> Option<&SeoRecord> {
        self.seo.iter().find(|seo| seo.launch_id == launch_id)
    }
}

/// Whether a keyword or the title contains the lowercase needle.
fn seo_matches(seo: &SeoRecord, needle: &str) -> bool {
    let contains = |s: &str| s.to_lowercase().contains(needle);
    let keyword_hit = match &seo.keywords {
        Some(Keywords::List(list)) => list.iter().any(|k| contains(k.as_str())),
        Some(Keywords::Text(text)) => contains(text.as_str()),
        None => false,
    };
    keyword_hit || contains(seo.title.as_str())
}
