mod common;

use common::{client_for, mock_nav_feed, mock_scheme_api, setup_server};
use mftool_rs::Scheme;

#[tokio::test]
async fn facade_covers_the_whole_surface_for_one_code() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let _api = mock_scheme_api(&server, "119598");
    let client = client_for(&server);

    let scheme = Scheme::new(&client, "119598");
    assert_eq!(scheme.code(), "119598");
    assert!(scheme.is_valid().await.unwrap());

    let quote = scheme.quote().await.unwrap().unwrap();
    assert_eq!(quote.scheme_code, "119598");
    assert_eq!(quote.nav, "23.4560");

    let details = scheme.details().await.unwrap().unwrap();
    assert_eq!(details.meta.scheme_code, "119598");

    let history = scheme.historical_nav().await.unwrap().unwrap();
    assert_eq!(history.data.unwrap().len(), 4);
}

#[tokio::test]
async fn facade_maps_an_unknown_code_to_none_everywhere() {
    let server = setup_server();
    let _feed = mock_nav_feed(&server);
    let client = client_for(&server);

    let scheme = Scheme::new(&client, "424242");
    assert!(!scheme.is_valid().await.unwrap());
    assert!(scheme.quote().await.unwrap().is_none());
    assert!(scheme.details().await.unwrap().is_none());
    assert!(scheme.historical_nav().await.unwrap().is_none());
}
