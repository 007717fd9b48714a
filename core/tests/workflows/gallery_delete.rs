// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Gallery delete workflows.

use launchdesk_client::ObjectKey;
use launchdesk_core::{Gallery, Notice};

use crate::common::{FakeSource, media_object};

async fn loaded(source: &FakeSource) -> Gallery {
    let mut gallery = Gallery::new("https://cdn.example.com");
    gallery.refresh(source).await;
    gallery
}

fn keys(gallery: &Gallery) -> Vec<&str> {
    gallery.items().iter().map(|i| i.key.as_str()).collect()
}

#[tokio::test]
async fn bulk_delete_issues_one_call_per_selected_key() {
    // Arrange
    let source = FakeSource::with_media(vec![
        media_object("a.png"),
        media_object("b.png"),
        media_object("c.mp4"),
        media_object("d.png"),
    ]);
    let mut gallery = loaded(&source).await;
    gallery.toggle_selection_mode();
    for key in ["c.mp4", "a.png", "d.png"] {
        gallery.toggle(&ObjectKey::from(key));
    }

    // Act
    let report = gallery.delete_selected(&source).await;

    // Assert
    assert!(report.is_complete());
    assert_eq!(source.delete_calls(), vec!["c.mp4", "a.png", "d.png"]);
    assert_eq!(keys(&gallery), vec!["b.png"]);
    assert!(gallery.selected().is_empty());
    assert!(!gallery.is_selecting());
    assert_eq!(gallery.notice(), None);
}

#[tokio::test]
async fn bulk_delete_stops_at_first_failure() {
    // Arrange
    let source = FakeSource::with_media(vec![
        media_object("a.png"),
        media_object("b.png"),
        media_object("c.png"),
        media_object("d.png"),
    ])
    .fail_delete_of("c.png");
    let mut gallery = loaded(&source).await;
    gallery.toggle_selection_mode();
    for key in ["a.png", "b.png", "c.png", "d.png"] {
        gallery.toggle(&ObjectKey::from(key));
    }

    // Act
    let report = gallery.delete_selected(&source).await;

    // Assert - items before the failure are gone, the rest stay selected
    assert_eq!(
        report.deleted,
        vec![ObjectKey::from("a.png"), ObjectKey::from("b.png")]
    );
    assert_eq!(report.failed_at, Some(ObjectKey::from("c.png")));
    assert_eq!(source.delete_calls(), vec!["a.png", "b.png", "c.png"]);
    assert_eq!(keys(&gallery), vec!["c.png", "d.png"]);
    let selected: Vec<_> = gallery.selected().iter().map(ObjectKey::as_str).collect();
    assert_eq!(selected, vec!["c.png", "d.png"]);
    assert!(gallery.is_selecting());
    assert_eq!(gallery.notice(), Some(Notice::DeleteFailed));
    assert_eq!(Notice::DeleteFailed.to_string(), "error deleting file");
}

#[tokio::test]
async fn bulk_delete_with_empty_selection_sends_nothing() {
    let source = FakeSource::with_media(vec![media_object("a.png")]);
    let mut gallery = loaded(&source).await;
    gallery.toggle_selection_mode();

    let report = gallery.delete_selected(&source).await;

    assert!(report.deleted.is_empty());
    assert!(source.delete_calls().is_empty());
    assert_eq!(gallery.notice(), Some(Notice::NothingSelected));
    assert_eq!(keys(&gallery), vec!["a.png"]);
}

#[tokio::test]
async fn single_delete_removes_only_that_item() {
    let source = FakeSource::with_media(vec![media_object("a.png"), media_object("b.png")]);
    let mut gallery = loaded(&source).await;

    gallery
        .delete_one(&source, &ObjectKey::from("a.png"))
        .await
        .unwrap();

    assert_eq!(keys(&gallery), vec!["b.png"]);
    assert_eq!(source.stored_keys(), vec!["b.png"]);
}

#[tokio::test]
async fn failed_single_delete_keeps_item() {
    let source = FakeSource::with_media(vec![media_object("a.png")]).fail_delete_of("a.png");
    let mut gallery = loaded(&source).await;

    let err = gallery
        .delete_one(&source, &ObjectKey::from("a.png"))
        .await
        .unwrap_err();

    assert_eq!(err, Notice::DeleteFailed);
    assert_eq!(keys(&gallery), vec!["a.png"]);
}

#[tokio::test]
async fn failed_refresh_keeps_items() {
    let source = FakeSource::with_media(vec![media_object("a.png")]);
    let mut gallery = loaded(&source).await;

    let broken = FakeSource::default().fail_listing();
    gallery.refresh(&broken).await;

    assert_eq!(keys(&gallery), vec!["a.png"]);
    assert_eq!(gallery.notice(), Some(Notice::FetchMediaFailed));
}
