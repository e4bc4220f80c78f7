use serde::{Deserialize, Serialize};

// ============ Request / Response ============

/// A single translation request.
///
/// `text` is sent as-is; empty text is not rejected client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Source text to translate.
    pub text: String,
    /// ISO 639-1 code of the target language (e.g. `"es"`).
    pub target: String,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
        }
    }
}

/// Result of a successful translation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// The translated text.
    pub text: String,
    /// Target language code the text was translated into.
    pub target: String,
    /// Source language detected by the provider, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<String>,
}

// ============ Provider Types ============

/// Identifies which translation provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Google Cloud Translation (Basic, v2). Requires feature `google`.
    #[cfg(feature = "google")]
    Google,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "google")]
            Self::Google => write!(f, "google"),
        }
    }
}

// ============ Provider Metadata Types ============

/// The input type of a credential field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
}

/// Definition of a single credential field required by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Machine-readable field key (e.g., `"apiKey"`).
    pub key: String,
    /// Human-readable label (e.g., `"API Key"`).
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Name of the environment variable conventionally holding this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_var: Option<String>,
    /// Optional help/description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Static metadata describing a translation provider.
///
/// Obtain via [`TranslationProvider::metadata()`](crate::TranslationProvider::metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider type identifier.
    pub id: ProviderType,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Default API endpoint.
    pub endpoint: String,
    /// Credential fields required to authenticate with this provider.
    pub required_fields: Vec<ProviderCredentialField>,
}

// ============ Credential Types ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for all supported translation providers.
///
/// Serialized as a tagged enum with `"provider"` as the tag and `"credentials"` as the content:
///
/// ```json
/// { "provider": "google", "credentials": { "api_key": "..." } }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Google Cloud Translation credentials. Requires feature `google`.
    #[cfg(feature = "google")]
    #[serde(rename = "google")]
    Google {
        /// Google Cloud API key.
        api_key: String,
    },
}

impl ProviderCredentials {
    /// Get the provider type for these credentials.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "google")]
            Self::Google { .. } => ProviderType::Google,
        }
    }

    /// Check that no required field is blank.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        match self {
            #[cfg(feature = "google")]
            Self::Google { api_key } if api_key.trim().is_empty() => {
                Err(CredentialValidationError::EmptyField {
                    provider: self.provider_type(),
                    field: "apiKey".to_string(),
                    label: "API Key".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

// 凭证不应出现在日志里
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "google")]
            Self::Google { .. } => f
                .debug_struct("Google")
                .field("api_key", &"<redacted>")
                .finish(),
        }
    }
}
