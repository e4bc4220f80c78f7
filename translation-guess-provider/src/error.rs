use serde::{Deserialize, Serialize};

/// Unified error type for all translation provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Requests are never retried by this crate; callers decide what a failure means for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API key is missing, invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The key is valid but not allowed to call the API (API disabled, referrer blocked, ...).
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The project's daily character quota has been used up.
    ///
    /// Unlike [`RateLimited`](Self::RateLimited), this is not a transient condition.
    QuotaExceeded {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected by the API.
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The requested target language is not supported by the provider.
    UnsupportedLanguage {
        /// Provider that produced the error.
        provider: String,
        /// The rejected language code.
        language: String,
    },

    /// Failed to parse the provider's API response (including a missing `translatedText`).
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（凭证错误、配额、参数错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::QuotaExceeded { .. }
                | Self::RateLimited { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedLanguage { .. }
        )
    }

    /// Provider that produced the error.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::InvalidCredentials { provider, .. }
            | Self::PermissionDenied { provider, .. }
            | Self::QuotaExceeded { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::UnsupportedLanguage { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::Unknown { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::QuotaExceeded { provider, .. } => {
                write!(f, "[{provider}] Quota exceeded")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::UnsupportedLanguage { provider, language } => {
                write!(f, "[{provider}] Unsupported target language: {language}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "google".to_string(),
            raw_message: Some("API key not valid".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[google] Invalid credentials: API key not valid"
        );
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "google".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[google] Invalid credentials");
    }

    #[test]
    fn display_rate_limited_with_retry_after() {
        let e = ProviderError::RateLimited {
            provider: "google".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[google] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_unsupported_language() {
        let e = ProviderError::UnsupportedLanguage {
            provider: "google".to_string(),
            language: "xx".to_string(),
        };
        assert_eq!(e.to_string(), "[google] Unsupported target language: xx");
    }

    #[test]
    fn display_unknown_uses_raw_message() {
        let e = ProviderError::Unknown {
            provider: "google".to_string(),
            raw_code: Some("INTERNAL".to_string()),
            raw_message: "Internal error encountered.".to_string(),
        };
        assert_eq!(e.to_string(), "[google] Internal error encountered.");
    }

    #[test]
    fn display_parse_error() {
        let e = ProviderError::ParseError {
            provider: "google".to_string(),
            detail: "missing translatedText".to_string(),
        };
        assert_eq!(e.to_string(), "[google] Parse error: missing translatedText");
    }

    #[test]
    fn expected_errors() {
        let e = ProviderError::QuotaExceeded {
            provider: "google".to_string(),
            raw_message: None,
        };
        assert!(e.is_expected());

        let e = ProviderError::NetworkError {
            provider: "google".to_string(),
            detail: "reset".to_string(),
        };
        assert!(!e.is_expected());

        let e = ProviderError::ParseError {
            provider: "google".to_string(),
            detail: "missing field".to_string(),
        };
        assert!(!e.is_expected());
    }

    #[test]
    fn provider_accessor() {
        let e = ProviderError::Timeout {
            provider: "google".to_string(),
            detail: "30s".to_string(),
        };
        assert_eq!(e.provider(), "google");
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::ParseError {
            provider: "google".to_string(),
            detail: "bad".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "ParseError");
        assert_eq!(json["provider"], "google");
    }
}
