//! Translation provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "google")]
mod google;

#[cfg(feature = "google")]
pub use google::GoogleTranslateProvider;
