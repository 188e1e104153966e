//! mftool-rs: ergonomic client for publicly published Indian mutual fund data.
//!
//! Two upstream sources back everything in this crate:
//! - the AMFI bulk NAV feed (`NAVAll.txt`), a semicolon-delimited plain-text
//!   dump of every scheme's latest NAV, used for code listings and quotes;
//! - the per-scheme JSON API (`api.mfapi.in/mf/<code>`), used for scheme
//!   metadata and the full historical NAV series.
//!
//! The [`MfClient`] owns the HTTP session, endpoint configuration and the
//! scheme registry snapshot. [`Scheme`] is the high-level per-code entry
//! point; the per-operation builders under [`quote`], [`registry`] and
//! [`history`] are available when a call needs a non-default cache or retry
//! policy.
//!
//! # Example
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), mftool_rs::MfError> {
//! use mftool_rs::{MfClient, Scheme};
//!
//! let client = MfClient::default();
//! let scheme = Scheme::new(&client, "119598");
//!
//! if let Some(quote) = scheme.quote().await? {
//!     println!("{}: {} as of {}", quote.scheme_name, quote.nav, quote.last_updated);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod dates;
pub(crate) mod feed;
pub mod history;
pub mod quote;
pub mod registry;
pub mod returns;
mod scheme;

pub use crate::core::client::{Backoff, CacheMode, MfClientBuilder, RetryConfig};
pub use crate::core::{MfClient, MfError, Quote, ToJson};
pub use crate::history::{HistoryBuilder, NavRecord, SchemeDetails, SchemeHistory, SchemeMeta};
pub use crate::quote::QuoteBuilder;
pub use crate::registry::{RegistryBuilder, SchemeRegistry};
pub use crate::returns::{BalanceValue, SipReturns};
pub use crate::scheme::Scheme;
