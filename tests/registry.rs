mod common;

use common::{client_for, mock_nav_feed, mock_nav_feed_status, setup_server};
use mftool_rs::{MfError, ToJson};

#[tokio::test]
async fn refresh_builds_the_complete_registry() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    let registry = client.refresh_registry().await.unwrap();

    assert_eq!(registry.len(), 7);
    assert!(registry.contains("119551"));
    assert!(registry.contains("10130"));
    assert_eq!(
        registry.name_of("119552"),
        Some("Aditya Birla Sun Life Banking & PSU Debt Fund - DIRECT - Growth")
    );
    // header and banner lines never become entries
    assert!(!registry.contains("Scheme Code"));
}

#[tokio::test]
async fn membership_decides_validity() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    client.refresh_registry().await.unwrap();

    assert!(client.is_valid_code("119598").await.unwrap());
    assert!(!client.is_valid_code("999999").await.unwrap());
    assert!(!client.is_valid_code("1195").await.unwrap());
}

#[tokio::test]
async fn empty_code_is_invalid_without_any_network_call() {
    let server = setup_server();
    let feed = mock_nav_feed(&server);
    let client = client_for(&server);

    assert!(!client.is_valid_code("").await.unwrap());
    assert!(!client.is_valid_code("   ").await.unwrap());
    assert_eq!(feed.hits(), 0);
}

#[tokio::test]
async fn validation_reuses_the_snapshot() {
    let server = setup_server();
    let feed = mock_nav_feed(&server);
    let client = client_for(&server);

    // first call loads the feed, later ones hit the snapshot
    assert!(client.is_valid_code("119551").await.unwrap());
    assert!(client.is_valid_code("119552").await.unwrap());
    assert!(!client.is_valid_code("999999").await.unwrap());
    assert_eq!(feed.hits(), 1);
}

#[tokio::test]
async fn feed_http_error_propagates() {
    let server = setup_server();
    let _feed = mock_nav_feed_status(&server, 500);
    let client = client_for(&server);

    let err = client.refresh_registry().await.unwrap_err();
    match err {
        MfError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn registry_json_round_trip() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    let registry = client.refresh_registry().await.unwrap();
    let json = registry.to_json().unwrap();
    let back: mftool_rs::SchemeRegistry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, *registry);
}

#[tokio::test]
async fn concurrent_validation_never_sees_a_partial_registry() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    client.refresh_registry().await.unwrap();

    // readers run while a refresh replaces the snapshot; the swap is a single
    // Arc store, so every lookup sees a complete map (old or new)
    let reader = {
        let client = client.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                assert!(client.is_valid_code("119551").await.unwrap());
            }
        })
    };
    let refresher = {
        let client = client.clone();
        tokio::spawn(async move {
            for _ in 0..10 {
                let registry = client.refresh_registry().await.unwrap();
                assert_eq!(registry.len(), 7);
            }
        })
    };

    reader.await.unwrap();
    refresher.await.unwrap();
}
