//! The scheme registry: every known scheme code mapped to its display name.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{MfClient, MfError, ToJson};
use crate::feed;

/// An immutable snapshot of the scheme code → scheme name mapping.
///
/// Rebuilt in full on every refresh; there is no incremental update. A code
/// is valid if and only if it is a key of the snapshot, so validity is a
/// property of *when* the registry was last refreshed, not of the code
/// string itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeRegistry {
    schemes: HashMap<String, String>,
}

impl SchemeRegistry {
    pub(crate) fn from_feed(body: &str) -> Self {
        let schemes = feed::parse_records(body)
            .map(|rec| (rec.code, rec.name))
            .collect();
        Self { schemes }
    }

    /// Whether `code` is a key of this snapshot.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.schemes.contains_key(code)
    }

    /// The display name registered for `code`, if any.
    #[must_use]
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.schemes.get(code).map(String::as_str)
    }

    /// Number of schemes in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Iterate over `(code, name)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.schemes
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    /// All `(code, name)` pairs whose scheme name contains `fragment`
    /// (case-insensitive). Useful for narrowing the listing to one fund house.
    pub fn schemes_matching(&self, fragment: &str) -> Vec<(&str, &str)> {
        let needle = fragment.to_lowercase();
        self.iter()
            .filter(|(_, name)| name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl ToJson for SchemeRegistry {}

/// A builder for fetching a fresh [`SchemeRegistry`] snapshot.
///
/// On success the snapshot is also stored on the client, atomically replacing
/// any previous one, so later `is_valid_code` calls see it.
pub struct RegistryBuilder<'a> {
    client: &'a MfClient,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl<'a> RegistryBuilder<'a> {
    pub fn new(client: &'a MfClient) -> Self {
        Self {
            client,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode for this specific fetch.
    #[must_use]
    pub fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's retry policy for this specific fetch.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetch the bulk feed and build the registry from scratch.
    pub async fn fetch(self) -> Result<Arc<SchemeRegistry>, MfError> {
        let body = feed::fetch(self.client, self.cache_mode, self.retry_override.as_ref()).await?;
        let registry = Arc::new(SchemeRegistry::from_feed(&body));
        self.client.store_registry(registry.clone()).await;
        Ok(registry)
    }
}
