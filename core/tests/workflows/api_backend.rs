// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Components driven through the real HTTP client against a mock server.

use jiff::civil::date;
use launchdesk_client::{ApiClient, ObjectKey};
use launchdesk_core::{Gallery, GuardOutcome, LaunchGuard, Redirect};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::test_config;

#[tokio::test]
async fn gallery_bulk_delete_over_http() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/media/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "Key": "a.png", "LastModified": "2024-05-01T10:00:00.000Z" },
            { "Key": "b.png", "LastModified": "2024-05-02T10:00:00.000Z" },
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/media"))
        .and(body_json(json!({ "key": "a.png" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/media"))
        .and(body_json(json!({ "key": "b.png" })))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = ApiClient::new(config.client_config()).unwrap();
    let mut gallery = Gallery::new(config.asset_base_url.clone());
    gallery.refresh(&client).await;
    gallery.toggle_selection_mode();
    gallery.toggle(&ObjectKey::from("a.png"));
    gallery.toggle(&ObjectKey::from("b.png"));

    // Act
    let report = gallery.delete_selected(&client).await;

    // Assert
    assert_eq!(report.deleted, vec![ObjectKey::from("a.png")]);
    assert_eq!(report.failed_at, Some(ObjectKey::from("b.png")));
    assert_eq!(gallery.items().len(), 1);
}

#[tokio::test]
async fn launch_guard_over_http() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launch/66a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "launchDate": "01.01.2099",
            "endDate": "02.01.2099",
        })))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = ApiClient::new(config.client_config()).unwrap();

    let outcome = LaunchGuard::resolve(&client, "66a1", date(2024, 6, 1)).await;

    assert!(matches!(
        outcome,
        GuardOutcome::Redirect { redirect: Redirect::Teaser(ref p), .. } if p == "/fragman/66a1"
    ));
}
