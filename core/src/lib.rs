// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core logic of Launchdesk: media picking, bounded text, ordered lists,
//! launch windows, launch search and the media gallery.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod browse;
mod config;
mod gallery;
mod launch;
mod list;
mod media;
mod notice;
mod overlay;
mod picker;
mod section;
mod source;
mod text;

pub use crate::browse::{LaunchBrowser, LaunchCard};
pub use crate::config::{APP_NAME, Config};
pub use crate::gallery::{BulkDeleteReport, Gallery, GalleryRow};
pub use crate::launch::{
    Bucket, GuardOutcome, LAUNCH_ENDED, Launch, LaunchDate, LaunchDateError, LaunchGuard,
    LaunchPhase, LaunchWindow, Redirect,
};
pub use crate::list::{
    AccordionItem, Applied, ItemRef, ListCommand, ListItem, OrderedList, REELS_MINIMUM_ADVISORY,
    ReelCard,
};
pub use crate::media::{MediaItem, MediaKind, MediaMatch, asset_url};
pub use crate::notice::Notice;
pub use crate::overlay::{Bounds, DismissibleOverlay};
pub use crate::picker::{MediaPicker, MediaSelected};
pub use crate::section::{
    AccordionSection, FieldKind, FieldSet, FieldSpec, FlipCardSection, FullTextSection,
    HeaderSection, ReelsSection, Section, SectionKind, TextCardSection, TwinHeroSection,
    set_field,
};
pub use crate::source::{LaunchSource, MediaSource};
pub use crate::text::{
    ACCORDION_SUBTITLE, BoundedText, FULL_TEXT, LIMIT_EXCEEDED, SIDE_CARD_TEXT, clamp,
};
