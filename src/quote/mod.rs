//! Point-in-time NAV quotes from the bulk feed.

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{MfClient, MfError, Quote};
use crate::feed;

/// Fetch the current quote for a single scheme code.
///
/// Convenience wrapper over [`QuoteBuilder`] with default cache/retry policy.
pub async fn quote(client: &MfClient, code: impl Into<String>) -> Result<Option<Quote>, MfError> {
    QuoteBuilder::new(client, code).fetch().await
}

/// A builder for fetching a scheme's latest quote.
pub struct QuoteBuilder<'a> {
    client: &'a MfClient,
    code: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl<'a> QuoteBuilder<'a> {
    /// Creates a new `QuoteBuilder` for a given scheme code.
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

    /// Fetch the quote, or `None` if the code is not in the registry.
    ///
    /// The feed is re-read for the lookup (the registry snapshot only holds
    /// names). Records are matched on the exact code field, not by substring,
    /// so a code that happens to be a prefix of another can never resolve to
    /// the wrong scheme's NAV.
    pub async fn fetch(self) -> Result<Option<Quote>, MfError> {
        if !self.client.is_valid_code(&self.code).await? {
            return Ok(None);
        }

        let body = feed::fetch(self.client, self.cache_mode, self.retry_override.as_ref()).await?;
        Ok(find_quote(&body, &self.code))
    }
}

pub(crate) fn find_quote(body: &str, code: &str) -> Option<Quote> {
    feed::parse_records(body)
        .find(|rec| rec.code == code)
        .map(|rec| Quote {
            scheme_code: rec.code,
            scheme_name: rec.name,
            nav: rec.nav,
            last_updated: rec.date,
        })
}
