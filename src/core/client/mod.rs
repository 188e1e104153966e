//! Public client surface + builder.
//! Internals are split into `retry` (retry/cache policy) and `constants` (UA + defaults).

mod constants;
mod retry;

use crate::core::MfError;
use crate::registry::{RegistryBuilder, SchemeRegistry};
use constants::{DEFAULT_NAV_FEED_URL, DEFAULT_SCHEME_API_BASE, USER_AGENT};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

pub use retry::{Backoff, CacheMode, RetryConfig};

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// The shared client: HTTP session, endpoint configuration, retry/cache
/// policy, and the current scheme registry snapshot.
///
/// Cloning is cheap; clones share the HTTP connection pool, the response
/// cache and the registry snapshot.
#[derive(Debug, Clone)]
pub struct MfClient {
    http: Client,
    nav_feed_url: Url,
    scheme_api_base: Url,
    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
    registry: Arc<RwLock<Option<Arc<SchemeRegistry>>>>,
}

impl Default for MfClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl MfClient {
    /// Create a new builder.
    pub fn builder() -> MfClientBuilder {
        MfClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn nav_feed_url(&self) -> &Url {
        &self.nav_feed_url
    }
    pub(crate) fn scheme_api_base(&self) -> &Url {
        &self.scheme_api_base
    }

    /* ----------------------- registry ----------------------- */

    /// Fetch the bulk feed and rebuild the scheme registry from scratch.
    ///
    /// The new snapshot replaces the old one atomically: a concurrent reader
    /// sees either the previous complete registry or the new complete
    /// registry, never a partially built map.
    pub async fn refresh_registry(&self) -> Result<Arc<SchemeRegistry>, MfError> {
        RegistryBuilder::new(self)
            .cache_mode(CacheMode::Refresh)
            .fetch()
            .await
    }

    /// The most recent registry snapshot, fetching one if none was ever built.
    pub async fn registry(&self) -> Result<Arc<SchemeRegistry>, MfError> {
        {
            let guard = self.registry.read().await;
            if let Some(reg) = guard.as_ref() {
                return Ok(reg.clone());
            }
        }
        RegistryBuilder::new(self).fetch().await
    }

    /// Whether `code` is a known scheme code.
    ///
    /// An empty (or all-whitespace) code is never valid. Otherwise this is a
    /// lookup against the last loaded snapshot; the feed is only fetched if no
    /// snapshot exists yet, so validation stays O(1) after the first load.
    pub async fn is_valid_code(&self, code: &str) -> Result<bool, MfError> {
        if code.trim().is_empty() {
            return Ok(false);
        }
        Ok(self.registry().await?.contains(code))
    }

    pub(crate) async fn store_registry(&self, registry: Arc<SchemeRegistry>) {
        let mut guard = self.registry.write().await;
        *guard = Some(registry);
    }

    /* ------------------------ cache ------------------------- */

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let key = url.as_str().to_string();
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(&key)
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let store = match &self.cache {
            Some(s) => s.clone(),
            None => return,
        };
        let key = url.as_str().to_string();
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let expires_at = Instant::now() + ttl;
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at,
        };
        let mut guard = store.map.write().await;
        guard.insert(key, entry);
    }

    /* ------------------------ network ------------------------ */

    /// Send a request, honoring the retry policy (per-call override first,
    /// then the client default). With retries disabled this is a single
    /// `send` and any transport error propagates untouched.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, MfError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt: u32 = 0;
        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| MfError::Data("request body not cloneable for retry".into()))?;

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt >= cfg.max_retries || !cfg.retry_on_status.contains(&status) {
                        return Ok(resp);
                    }
                }
                Err(e) => {
                    let transient = (cfg.retry_on_timeout && e.is_timeout())
                        || (cfg.retry_on_connect && e.is_connect());
                    if attempt >= cfg.max_retries || !transient {
                        return Err(e.into());
                    }
                }
            }

            tokio::time::sleep(cfg.backoff.delay_for(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Builds an [`MfClient`].
///
/// All upstream configuration lives here: there is no process-wide config
/// file or singleton. Unset options fall back to the public AMFI/mfapi
/// endpoints and a disabled cache.
#[derive(Default)]
pub struct MfClientBuilder {
    user_agent: Option<String>,
    nav_feed_url: Option<Url>,
    scheme_api_base: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl MfClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the bulk NAV feed URL (e.g., `https://www.amfiindia.com/spages/NAVAll.txt`).
    pub fn nav_feed_url(mut self, url: Url) -> Self {
        self.nav_feed_url = Some(url);
        self
    }

    /// Override the per-scheme API base (e.g., `https://api.mfapi.in/mf/`).
    /// The scheme code is appended to this base, so keep the trailing slash.
    pub fn scheme_api_base(mut self, url: Url) -> Self {
        self.scheme_api_base = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled and every call re-reads upstream.
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Set the client-wide retry policy. Default: retries disabled.
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    pub fn build(self) -> Result<MfClient, MfError> {
        let nav_feed_url = self.nav_feed_url.unwrap_or(Url::parse(DEFAULT_NAV_FEED_URL)?);
        let scheme_api_base = self
            .scheme_api_base
            .unwrap_or(Url::parse(DEFAULT_SCHEME_API_BASE)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(Duration::from_secs(30)));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(MfClient {
            http,
            nav_feed_url,
            scheme_api_base,
            retry: self.retry.unwrap_or_default(),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
            registry: Arc::new(RwLock::new(None)),
        })
    }
}
