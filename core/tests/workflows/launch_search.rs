// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Launch listing workflows.

use jiff::civil::date;
use launchdesk_core::{Bucket, LaunchBrowser, Notice};

use crate::common::{FakeSource, launch_record, seo_record};

fn source() -> FakeSource {
    FakeSource::with_launches(
        vec![
            launch_record("1", "01.05.2024", "30.06.2024"),
            launch_record("2", "01.09.2024", "30.09.2024"),
            launch_record("3", "01.10.2024", "31.10.2024"),
        ],
        vec![
            seo_record("1", "Summer SUV", &["suv", "electric"]),
            seo_record("2", "Autumn Hatchback", &["hatchback"]),
        ],
    )
}

#[tokio::test]
async fn load_then_filter_and_search() {
    let today = date(2024, 6, 1);
    let mut browser = LaunchBrowser::load(&source()).await.unwrap();

    browser.select_bucket(Bucket::Upcoming, today);
    let upcoming: Vec<_> = browser.visible().map(|l| l.id.clone()).collect();
    assert_eq!(upcoming, vec!["2", "3"]);

    browser.search("hatch", today);
    let cards = browser.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].launch.id, "2");
    assert_eq!(
        cards[0].seo.map(|s| s.title.as_str()),
        Some("Autumn Hatchback")
    );

    browser.search("", today);
    let restored: Vec<_> = browser.visible().map(|l| l.id.clone()).collect();
    assert_eq!(restored, upcoming);
}

#[tokio::test]
async fn load_failure_is_a_generic_notice() {
    let source = FakeSource::default().fail_listing();
    let err = LaunchBrowser::load(&source).await.unwrap_err();
    assert_eq!(err, Notice::FetchLaunchFailed);
}
