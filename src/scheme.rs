use rust_decimal::Decimal;

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{MfClient, MfError, Quote};
use crate::history::{HistoryBuilder, SchemeDetails, SchemeHistory};
use crate::quote::QuoteBuilder;
use crate::returns::{self, BalanceValue, SipReturns};

/// A high-level interface for a single scheme code, providing convenient
/// access to all available data.
///
/// A `Scheme` is created with an [`MfClient`] and a scheme code. Every
/// data-bearing method returns `Ok(None)` when the code is not present in the
/// registry snapshot, so batch callers can skip unknown codes without
/// special-casing errors.
///
/// # Example
///
/// ```no_run
/// # use mftool_rs::{MfClient, Scheme};
/// # #[tokio::main]
/// # async fn main() -> Result<(), mftool_rs::MfError> {
/// let client = MfClient::default();
/// let scheme = Scheme::new(&client, "119598");
///
/// if let Some(history) = scheme.historical_nav().await? {
///     match history.data {
///         Some(records) => println!("{} NAV records", records.len()),
///         None => println!("no NAV data published yet"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Scheme {
    client: MfClient,
    code: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl Scheme {
    /// Creates a new `Scheme` for a given code.
    pub fn new(client: &MfClient, code: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            code: code.into(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode for all subsequent API calls made by this `Scheme` instance.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's retry policy for all subsequent API calls made by this `Scheme` instance.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// The scheme code this instance was created with.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether the code is present in the registry snapshot.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn is_valid(&self) -> Result<bool, MfError> {
        self.client.is_valid_code(&self.code).await
    }

    /// The latest quote from the bulk feed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn quote(&self) -> Result<Option<Quote>, MfError> {
        QuoteBuilder::new(&self.client, self.code.as_str())
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Scheme metadata (fund house, type, category, start date).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn details(&self) -> Result<Option<SchemeDetails>, MfError> {
        HistoryBuilder::new(&self.client, self.code.as_str())
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .details()
            .await
    }

    /// The full historical NAV series with scheme metadata.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn historical_nav(&self) -> Result<Option<SchemeHistory>, MfError> {
        HistoryBuilder::new(&self.client, self.code.as_str())
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .historical_nav()
            .await
    }

    /// Market value of `units` at the current NAV.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn balance_value(&self, units: Decimal) -> Result<Option<BalanceValue>, MfError> {
        match self.quote().await? {
            Some(quote) => returns::balance_value(quote, units).map(Some),
            None => Ok(None),
        }
    }

    /// Absolute and annualised returns for a SIP of `monthly_sip` paid for
    /// `months` months that accumulated `units` units.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn sip_returns(
        &self,
        units: Decimal,
        monthly_sip: Decimal,
        months: u32,
    ) -> Result<Option<SipReturns>, MfError> {
        match self.quote().await? {
            Some(quote) => returns::sip_returns(quote, units, monthly_sip, months).map(Some),
            None => Ok(None),
        }
    }
}
