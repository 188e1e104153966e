//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking on the AMFI feed.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// AMFI bulk NAV feed: one semicolon-delimited record per scheme.
pub(crate) const DEFAULT_NAV_FEED_URL: &str = "https://www.amfiindia.com/spages/NAVAll.txt";

/// Per-scheme JSON API base (scheme code is appended).
pub(crate) const DEFAULT_SCHEME_API_BASE: &str = "https://api.mfapi.in/mf/";
