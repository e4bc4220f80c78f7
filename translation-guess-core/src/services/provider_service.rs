//! 翻译 Provider 构建

use std::sync::Arc;

use async_trait::async_trait;
use translation_guess_provider::{
    GoogleTranslateProvider, ProviderCredentials, ProviderError, ProviderMetadata,
    TranslateRequest, Translation, TranslationProvider, create_provider,
};

use crate::error::CoreResult;

/// 根据凭证构建 Provider
///
/// 没有凭证时返回 [`MissingCredentialsProvider`]：游戏照常启动，
/// 每次翻译都以凭证错误失败，不会发出网络请求。
pub fn build_provider(
    credentials: Option<ProviderCredentials>,
    endpoint: Option<&str>,
) -> CoreResult<Arc<dyn TranslationProvider>> {
    let Some(credentials) = credentials else {
        log::warn!("No translation API key configured, translations will fail");
        return Ok(Arc::new(MissingCredentialsProvider));
    };

    credentials.validate()?;
    let provider = create_provider(credentials, endpoint)?;
    log::info!("Translation provider ready: {}", provider.id());
    Ok(provider)
}

/// 未配置 API Key 时使用的占位 Provider
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingCredentialsProvider;

#[async_trait]
impl TranslationProvider for MissingCredentialsProvider {
    fn id(&self) -> &'static str {
        "google"
    }

    fn metadata() -> ProviderMetadata {
        GoogleTranslateProvider::metadata()
    }

    async fn translate(&self, _request: &TranslateRequest) -> Result<Translation, ProviderError> {
        Err(ProviderError::InvalidCredentials {
            provider: self.id().to_string(),
            raw_message: Some("API key not configured".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[tokio::test]
    async fn missing_credentials_provider_always_fails() {
        let provider = build_provider(None, None);
        assert!(provider.is_ok());
        let Ok(provider) = provider else { return };
        let result = provider.translate(&TranslateRequest::new("Hello", "es")).await;
        assert!(matches!(
            result,
            Err(ProviderError::InvalidCredentials { .. })
        ));
    }

    #[test]
    fn blank_key_is_rejected() {
        let result = build_provider(
            Some(ProviderCredentials::Google {
                api_key: "  ".to_string(),
            }),
            None,
        );
        assert!(matches!(result, Err(CoreError::CredentialValidation(_))));
    }

    #[test]
    fn builds_google_provider() {
        let result = build_provider(
            Some(ProviderCredentials::Google {
                api_key: "AIza-test".to_string(),
            }),
            Some("http://127.0.0.1:9/translate"),
        );
        assert!(matches!(result, Ok(p) if p.id() == "google"));
    }
}
