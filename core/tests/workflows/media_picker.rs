// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Media picker workflows.

use launchdesk_client::MediaObject;
use launchdesk_core::{Bounds, MediaKind, MediaMatch, MediaPicker, Notice};

use crate::common::{FakeSource, media_object};

fn with_launch(key: &str, launch_name: &str) -> MediaObject {
    MediaObject {
        launch_name: Some(launch_name.to_string()),
        ..media_object(key)
    }
}

#[tokio::test]
async fn picker_search_and_select() {
    // Arrange
    let source = FakeSource::with_media(vec![media_object("a.png"), media_object("b.mp4")]);
    let mut picker = MediaPicker::new(MediaMatch::Key);
    picker.refresh(&source).await;
    picker.overlay_mut().open();

    // Act
    picker.set_search("a");
    let visible: Vec<_> = picker.visible().into_iter().cloned().collect();
    let event = picker.select("a.png").unwrap();

    // Assert
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].kind(), MediaKind::Image);
    assert_eq!(event.key.as_str(), "a.png");
    assert!(!picker.overlay().is_open());
}

#[tokio::test]
async fn pickers_fetch_independently() {
    let source = FakeSource::with_media(vec![media_object("a.png")]);
    let mut first = MediaPicker::new(MediaMatch::Key);
    let mut second = MediaPicker::new(MediaMatch::Key);

    first.refresh(&source).await;
    second.refresh(&source).await;

    assert_eq!(first.items().len(), 1);
    assert_eq!(second.items().len(), 1);
}

#[tokio::test]
async fn launch_name_search_depends_on_match_rule() {
    let source = FakeSource::with_media(vec![
        with_launch("hero.png", "Spring Campaign"),
        media_object("spring-logo.svg"),
    ]);

    let mut by_key = MediaPicker::new(MediaMatch::Key);
    by_key.refresh(&source).await;
    by_key.set_search("campaign");
    assert!(by_key.visible().is_empty());

    let mut by_launch = MediaPicker::new(MediaMatch::KeyOrLaunchName);
    by_launch.refresh(&source).await;
    by_launch.set_search("campaign");
    assert_eq!(by_launch.visible().len(), 1);
}

#[tokio::test]
async fn failed_fetch_raises_generic_notice() {
    let source = FakeSource::default().fail_listing();
    let mut picker = MediaPicker::new(MediaMatch::Key);

    picker.refresh(&source).await;

    assert!(picker.items().is_empty());
    assert_eq!(picker.notice(), Some(Notice::FetchMediaFailed));
    assert_eq!(
        picker.notice().unwrap().to_string(),
        "could not fetch media list"
    );
}

#[test]
fn outside_click_dismisses_picker_overlay() {
    let mut picker = MediaPicker::new(MediaMatch::Key);
    picker.overlay_mut().open();
    picker.overlay_mut().set_bounds(Bounds {
        x: 0,
        y: 0,
        width: 40,
        height: 20,
    });

    assert!(!picker.overlay_mut().pointer_down(5, 5));
    assert!(picker.overlay_mut().pointer_down(50, 5));
    assert!(!picker.overlay().is_listening());
}
