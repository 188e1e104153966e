mod common;

use std::time::Duration;

use common::{client_for, mock_nav_feed, setup_server};
use mftool_rs::{Quote, QuoteBuilder, ToJson};
use url::Url;

#[tokio::test]
async fn valid_code_returns_its_quote() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    let quote = QuoteBuilder::new(&client, "119552").fetch().await.unwrap().unwrap();

    assert_eq!(quote.scheme_code, "119552");
    assert_eq!(
        quote.scheme_name,
        "Aditya Birla Sun Life Banking & PSU Debt Fund - DIRECT - Growth"
    );
    assert_eq!(quote.nav, "345.7716");
    assert_eq!(quote.last_updated, "29-Aug-2026");
}

#[tokio::test]
async fn unknown_code_returns_none() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    let quote = mftool_rs::quote::quote(&client, "999999").await.unwrap();
    assert!(quote.is_none());
}

#[tokio::test]
async fn prefix_code_resolves_to_its_own_record() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    // "10130" is a prefix of "101305", whose record comes first in the feed;
    // matching is on the exact code field, so the shorter code still gets its
    // own NAV
    let quote = QuoteBuilder::new(&client, "10130").fetch().await.unwrap().unwrap();
    assert_eq!(quote.scheme_code, "10130");
    assert_eq!(quote.scheme_name, "Quantum Liquid Fund - Growth");
    assert_eq!(quote.nav, "23.4560");
}

#[tokio::test]
async fn lookup_refetches_the_feed_when_caching_is_off() {
    let server = setup_server();
    let feed = mock_nav_feed(&server);
    let client = client_for(&server);

    QuoteBuilder::new(&client, "119551").fetch().await.unwrap().unwrap();

    // one read to build the registry, one fresh read for the quote itself
    assert_eq!(feed.hits(), 2);
}

#[tokio::test]
async fn cached_client_reads_the_feed_once() {
    let server = setup_server();
    let feed = mock_nav_feed(&server);
    let client = mftool_rs::MfClient::builder()
        .nav_feed_url(Url::parse(&format!("{}{}", server.base_url(), common::NAV_FEED_PATH)).unwrap())
        .scheme_api_base(Url::parse(&format!("{}/mf/", server.base_url())).unwrap())
        .cache_ttl(Duration::from_secs(300))
        .build()
        .unwrap();

    QuoteBuilder::new(&client, "119551").fetch().await.unwrap().unwrap();
    QuoteBuilder::new(&client, "119552").fetch().await.unwrap().unwrap();

    assert_eq!(feed.hits(), 1);
}

#[tokio::test]
async fn quote_json_round_trip() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    let quote = QuoteBuilder::new(&client, "119598").fetch().await.unwrap().unwrap();
    let json = quote.to_json().unwrap();
    let back: Quote = serde_json::from_str(&json).unwrap();
    assert_eq!(back, quote);
}
