//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::TranslationProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "google")]
use crate::providers::GoogleTranslateProvider;

/// Creates a [`TranslationProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// `endpoint` overrides the provider's default API URL (self-hosted proxies, test servers).
/// The returned provider is wrapped in `Arc<dyn TranslationProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use translation_guess_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(
///     ProviderCredentials::Google {
///         api_key: "your-key".to_string(),
///     },
///     None,
/// )
/// .unwrap();
/// ```
pub fn create_provider(
    credentials: ProviderCredentials,
    endpoint: Option<&str>,
) -> Result<Arc<dyn TranslationProvider>> {
    match credentials {
        #[cfg(feature = "google")]
        ProviderCredentials::Google { api_key } => {
            let provider = GoogleTranslateProvider::new(api_key);
            let provider = match endpoint {
                Some(endpoint) => provider.with_endpoint(endpoint),
                None => provider,
            };
            Ok(Arc::new(provider))
        }
    }
}
