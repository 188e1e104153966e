//! Scheme metadata and historical NAV series from the per-scheme JSON API.

mod api;
mod model;
mod wire;

pub use model::{NavRecord, SchemeDetails, SchemeHistory, SchemeMeta};

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{MfClient, MfError};

/// A builder for fetching scheme metadata and the historical NAV series.
///
/// Both [`details`](Self::details) and
/// [`historical_nav`](Self::historical_nav) issue the same per-code request;
/// they differ only in how much of the response they keep.
pub struct HistoryBuilder<'a> {
    client: &'a MfClient,
    code: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl<'a> HistoryBuilder<'a> {
    /// Creates a new `HistoryBuilder` for a given scheme code.
    pub fn new(client: &'a MfClient, code: impl Into<String>) -> Self {
        Self {
            client,
            code: code.into(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Scheme metadata plus the earliest record as the scheme's start date.
    ///
    /// Returns `None` for a code that is not in the registry. Fails with
    /// [`MfError::Data`] if the response lacks the `meta`/`data` fields or
    /// has no record to derive a start date from.
    pub async fn details(self) -> Result<Option<SchemeDetails>, MfError> {
        if !self.client.is_valid_code(&self.code).await? {
            return Ok(None);
        }
        let env = api::fetch_scheme(
            self.client,
            &self.code,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await?;
        api::parse_details(env).map(Some)
    }

    /// Scheme metadata plus the full NAV series, newest-first as upstream
    /// delivers it (no local re-sorting).
    ///
    /// Returns `None` for a code that is not in the registry. An upstream
    /// response with zero records yields `data: None` — the "data not
    /// available" sentinel — rather than an empty series.
    pub async fn historical_nav(self) -> Result<Option<SchemeHistory>, MfError> {
        if !self.client.is_valid_code(&self.code).await? {
            return Ok(None);
        }
        let env = api::fetch_scheme(
            self.client,
            &self.code,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await?;
        api::parse_history(env).map(Some)
    }
}
