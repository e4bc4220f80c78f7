//! # translation-guess-provider
//!
//! A small translation service abstraction used by the Translation Guess game.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Google Cloud Translation (v2)](https://cloud.google.com/translate) | `google` | API key (`?key=`) |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: Enable all providers listed above.
//! - **`google`**: Enable only the Google provider.
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use translation_guess_provider::{create_provider, ProviderCredentials, TranslateRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(
//!         ProviderCredentials::Google {
//!             api_key: std::env::var("GOOGLE_TRANSLATE_API_KEY")?,
//!         },
//!         None,
//!     )?;
//!
//!     let translation = provider
//!         .translate(&TranslateRequest::new("Hello", "es"))
//!         .await?;
//!     println!("{} ({})", translation.text, translation.target);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Transport failures become [`ProviderError::NetworkError`] or
//! [`ProviderError::Timeout`]; a response without `data.translations[0].translatedText`
//! becomes [`ProviderError::ParseError`]; API error bodies are mapped to
//! structured variants such as [`ProviderError::InvalidCredentials`].
//! Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::TranslationProvider;

// Re-export types
pub use types::{
    CredentialValidationError, FieldType, ProviderCredentialField, ProviderCredentials,
    ProviderMetadata, ProviderType, TranslateRequest, Translation,
};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "google")]
pub use providers::GoogleTranslateProvider;
