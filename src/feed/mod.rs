//! Fetching and parsing of the AMFI bulk NAV feed (`NAVAll.txt`).
//!
//! The feed is line-oriented text. Scheme records carry six `;`-delimited
//! positional fields:
//!
//! ```text
//! code;isin_payout;isin_reinvestment;name;nav;date
//! ```
//!
//! Everything else in the file (column headers, scheme-category banners, AMC
//! names, blank lines) has no `;INF` ISIN marker and is skipped.

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{MfClient, MfError, net};

/// The `;INF` ISIN prefix that distinguishes scheme records from headers.
const RECORD_MARKER: &str = ";INF";

const FIELD_CODE: usize = 0;
const FIELD_NAME: usize = 3;
const FIELD_NAV: usize = 4;
const FIELD_DATE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeedRecord {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) nav: String,
    pub(crate) date: String,
}

/// Parse a single feed line, or `None` if it is not a scheme record.
pub(crate) fn parse_line(line: &str) -> Option<FeedRecord> {
    if !line.contains(RECORD_MARKER) {
        return None;
    }
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() <= FIELD_DATE {
        return None;
    }
    Some(FeedRecord {
        code: fields[FIELD_CODE].trim().to_string(),
        name: fields[FIELD_NAME].trim().to_string(),
        nav: fields[FIELD_NAV].trim().to_string(),
        // the feed is CRLF-terminated
        date: fields[FIELD_DATE].trim_end_matches('\r').trim().to_string(),
    })
}

pub(crate) fn parse_records(body: &str) -> impl Iterator<Item = FeedRecord> + '_ {
    body.lines().filter_map(parse_line)
}

/// Fetch the raw feed body, honoring the cache mode and retry policy.
pub(crate) async fn fetch(
    client: &MfClient,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<String, MfError> {
    let url = client.nav_feed_url().clone();

    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(&url).await
    {
        return Ok(body);
    }

    let req = client.http().get(url.clone()).header("accept", "text/plain");
    let resp = client.send_with_retry(req, retry_override).await?;

    let status = resp.status().as_u16();
    let body = net::get_text(resp, "nav_all", "ALL", "txt").await?;

    if status >= 400 {
        return Err(MfError::Status {
            status,
            url: url.to_string(),
        });
    }

    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &body, None).await;
    }

    Ok(body)
}
