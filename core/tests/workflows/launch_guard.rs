// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Single-launch guard workflows.

use jiff::civil::date;
use launchdesk_core::{GuardOutcome, LaunchGuard, LaunchPhase, Notice, Redirect};

use crate::common::{FakeSource, launch_record};

fn source() -> FakeSource {
    FakeSource::with_launches(
        vec![
            launch_record("live", "01.06.2024", "30.06.2024"),
            launch_record("future", "01.01.2099", "02.01.2099"),
            launch_record("over", "01.01.2024", "31.01.2024"),
            launch_record("garbled", "June 1st", "30.06.2024"),
        ],
        Vec::new(),
    )
}

#[tokio::test]
async fn guard_redirects_running_launch_to_preview() {
    let outcome = LaunchGuard::resolve(&source(), "live", date(2024, 6, 30)).await;
    assert_eq!(
        outcome,
        GuardOutcome::Redirect {
            phase: LaunchPhase::Ongoing,
            redirect: Redirect::Preview("/preview/live".to_string()),
        }
    );
}

#[tokio::test]
async fn guard_redirects_future_launch_to_teaser() {
    let outcome = LaunchGuard::resolve(&source(), "future", date(2024, 6, 1)).await;
    assert_eq!(
        outcome,
        GuardOutcome::Redirect {
            phase: LaunchPhase::Upcoming,
            redirect: Redirect::Teaser("/fragman/future".to_string()),
        }
    );
}

#[tokio::test]
async fn guard_does_not_redirect_finished_launch() {
    let outcome = LaunchGuard::resolve(&source(), "over", date(2024, 6, 1)).await;
    assert_eq!(
        outcome,
        GuardOutcome::Redirect {
            phase: LaunchPhase::Finished,
            redirect: Redirect::Ended,
        }
    );
}

#[tokio::test]
async fn guard_reports_unavailable_launch() {
    let missing = LaunchGuard::resolve(&source(), "missing", date(2024, 6, 1)).await;
    assert_eq!(missing, GuardOutcome::Unavailable(Notice::FetchLaunchFailed));

    let garbled = LaunchGuard::resolve(&source(), "garbled", date(2024, 6, 1)).await;
    assert_eq!(garbled, GuardOutcome::Unavailable(Notice::FetchLaunchFailed));
}
