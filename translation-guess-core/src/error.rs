//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use translation_guess_provider::{CredentialValidationError, ProviderError};

/// Generic message shown to the player whenever a translation request fails.
///
/// The underlying cause is logged, never displayed.
pub const TRANSLATION_FAILED_MESSAGE: &str = "Failed to translate. Please try again.";

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Configuration could not be read or is malformed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Credential storage error
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// Credential validation errors (structured, supports field level errors)
    #[error("{0}")]
    CredentialValidation(CredentialValidationError),

    /// Guess submitted while no translated round is waiting for one
    #[error("No translated round is waiting for a guess")]
    GuessNotAllowed,

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, bad key, quota, etc.); used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::GuessNotAllowed | Self::CredentialValidation(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::ConfigError(_) | Self::CredentialError(_) => false,
        }
    }
}

impl From<CredentialValidationError> for CoreError {
    fn from(e: CredentialValidationError) -> Self {
        Self::CredentialValidation(e)
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_passes_through_display() {
        let err = CoreError::from(ProviderError::Timeout {
            provider: "google".to_string(),
            detail: "deadline".to_string(),
        });
        assert_eq!(
            err.to_string(),
            ProviderError::Timeout {
                provider: "google".to_string(),
                detail: "deadline".to_string(),
            }
            .to_string()
        );
        assert!(!err.is_expected());
    }

    #[test]
    fn expected_classification() {
        assert!(CoreError::GuessNotAllowed.is_expected());
        assert!(
            CoreError::from(ProviderError::InvalidCredentials {
                provider: "google".to_string(),
                raw_message: None,
            })
            .is_expected()
        );
        assert!(!CoreError::CredentialError("locked".to_string()).is_expected());
        assert!(!CoreError::ConfigError("bad value".to_string()).is_expected());
    }

    #[test]
    fn empty_api_key_is_expected() {
        let err = CoreError::from(CredentialValidationError::EmptyField {
            provider: translation_guess_provider::ProviderType::Google,
            field: "apiKey".to_string(),
            label: "API Key".to_string(),
        });
        assert!(err.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::GuessNotAllowed).unwrap_or_default();
        assert_eq!(json["code"], "GuessNotAllowed");
    }
}
