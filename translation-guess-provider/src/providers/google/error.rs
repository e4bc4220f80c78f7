//! Google Translation error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::GoogleTranslateProvider;

/// Google API error mapping
/// Reference: <https://cloud.google.com/translate/docs/reference/rest/v2/translate>
///
/// 错误码取自 `errors[0].reason`，缺失时取 `status`。
impl ProviderErrorMapper for GoogleTranslateProvider {
    fn provider_name(&self) -> &'static str {
        "google"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        // "API key not valid" 以 badRequest / INVALID_ARGUMENT 返回，需要按消息识别
        if raw.message.contains("API key not valid") || raw.message.contains("API key expired") {
            return ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            };
        }

        match raw.code.as_deref() {
            // Authentication error
            Some("keyInvalid" | "keyExpired" | "authError" | "UNAUTHENTICATED") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // API 未启用、来源被拦截等
            Some(
                "forbidden" | "accessNotConfigured" | "ipRefererBlocked" | "PERMISSION_DENIED",
            ) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Rate limit (transient)
            Some("rateLimitExceeded" | "userRateLimitExceeded") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // Quota exceeded
            Some("dailyLimitExceeded" | "quotaExceeded" | "RESOURCE_EXHAUSTED") => {
                ProviderError::QuotaExceeded {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // "Invalid Value"：Google 对不支持的 target 返回该错误
            Some("invalid") if context.target.is_some() => ProviderError::UnsupportedLanguage {
                provider: self.provider_name().to_string(),
                language: context.target.unwrap_or_default(),
            },

            // Invalid parameter
            Some("invalid" | "required" | "badRequest" | "INVALID_ARGUMENT") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "request".to_string(),
                    detail: raw.message,
                }
            }

            // Other error fallback
            _ => self.unknown_error(raw),
        }
    }
}
