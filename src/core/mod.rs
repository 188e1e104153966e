//! Core components of the `mftool-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`MfClient`] and its builder.
//! - The primary [`MfError`] type.
//! - Shared data models like [`Quote`].
//! - Internal networking logic.

/// The main client (`MfClient`), builder, and configuration.
pub mod client;
/// The primary error type (`MfError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules (e.g., `Quote`).
pub mod models;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::MfClient`
pub use client::{MfClient, MfClientBuilder};
pub use error::MfError;
pub use models::{Quote, ToJson};
