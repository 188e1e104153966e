#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

use mftool_rs::MfClient;

pub const NAV_FEED_PATH: &str = "/spages/NAVAll.txt";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{key}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client pointed at the mock server, caching disabled.
pub fn client_for(server: &MockServer) -> MfClient {
    MfClient::builder()
        .nav_feed_url(Url::parse(&format!("{}{}", server.base_url(), NAV_FEED_PATH)).unwrap())
        .scheme_api_base(Url::parse(&format!("{}/mf/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn mock_nav_feed(server: &'_ MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(NAV_FEED_PATH);
        then.status(200)
            .header("content-type", "text/plain")
            .body(fixture("nav_all", "ALL", "txt"));
    })
}

pub fn mock_nav_feed_status(server: &'_ MockServer, status: u16) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(NAV_FEED_PATH);
        then.status(status).body("Server Error");
    })
}

pub fn mock_scheme_api<'a>(server: &'a MockServer, code: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/mf/{code}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("scheme_api", code, "json"));
    })
}

pub fn mock_scheme_api_body<'a>(server: &'a MockServer, code: &'a str, body: &str) -> Mock<'a> {
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(GET).path(format!("/mf/{code}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
