//! 核心服务
//!
//! 封装 translation-guess-core 的配置、凭证和 Provider 构建，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;

use anyhow::Result;
use translation_guess_core::services::{AppConfig, build_provider};
use translation_guess_core::traits::CredentialStore;
use translation_guess_core::types::ProviderCredentials;
use translation_guess_core::{CoreResult, PendingTranslation};
use translation_guess_provider::TranslationProvider;

use super::credential_service::KeyringCredentialStore;
use super::translation_service::{CompletedTranslation, TranslationService};
use crate::model::KeySource;

/// TUI 核心服务
///
/// 持有后台运行时、凭证存储和配置
pub struct CoreService {
    translations: TranslationService,
    credential_store: Arc<dyn CredentialStore>,
    config: AppConfig,
}

impl CoreService {
    /// 使用系统钥匙串创建核心服务
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_store(config, Arc::new(KeyringCredentialStore::new()))
    }

    /// 使用指定的凭证存储创建核心服务
    pub fn with_store(config: AppConfig, credential_store: Arc<dyn CredentialStore>) -> Result<Self> {
        Ok(Self {
            translations: TranslationService::new()?,
            credential_store,
            config,
        })
    }

    /// 启动时构建 Provider
    ///
    /// 环境变量优先，其次是钥匙串；都没有时返回一个总是失败的 Provider。
    pub fn initial_provider(&self) -> Result<(Arc<dyn TranslationProvider>, KeySource)> {
        let credentials = self
            .translations
            .block_on(self.config.resolve_credentials(self.credential_store.as_ref()));

        let source = match (&credentials, self.config.api_key.is_some()) {
            (None, _) => KeySource::Missing,
            (Some(_), true) => KeySource::Environment,
            (Some(_), false) => KeySource::Keyring,
        };
        tracing::info!("API key source: {source:?}");

        let provider = build_provider(credentials, self.config.endpoint.as_deref())?;
        Ok((provider, source))
    }

    /// 在后台执行翻译
    pub fn translate(&self, provider: Arc<dyn TranslationProvider>, pending: PendingTranslation) {
        self.translations.spawn(provider, pending);
    }

    /// 取出所有已完成的翻译
    pub fn drain_completed(&mut self) -> Vec<CompletedTranslation> {
        self.translations.try_recv_all()
    }

    /// 保存 API Key 并返回使用新 Key 的 Provider
    ///
    /// 先校验并构建 Provider，成功后才写入钥匙串。
    pub fn save_api_key(&self, api_key: String) -> CoreResult<Arc<dyn TranslationProvider>> {
        let credentials = ProviderCredentials::Google { api_key };
        let provider = build_provider(Some(credentials.clone()), self.config.endpoint.as_deref())?;

        self.translations
            .block_on(self.credential_store.set(&credentials))?;
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use translation_guess_core::traits::InMemoryCredentialStore;

    use super::*;

    fn service(config: AppConfig, store: &InMemoryCredentialStore) -> Option<CoreService> {
        CoreService::with_store(config, Arc::new(store.clone())).ok()
    }

    #[test]
    fn missing_key_still_builds_provider() {
        let store = InMemoryCredentialStore::new();
        let Some(service) = service(AppConfig::default(), &store) else {
            return;
        };

        let Ok((provider, source)) = service.initial_provider() else {
            return;
        };
        assert_eq!(source, KeySource::Missing);
        assert_eq!(provider.id(), "google");
    }

    #[test]
    fn environment_key_wins_over_store() {
        let store = InMemoryCredentialStore::with_credentials(ProviderCredentials::Google {
            api_key: "from-store".to_string(),
        });
        let config = AppConfig {
            api_key: Some("from-env".to_string()),
            ..AppConfig::default()
        };
        let Some(service) = service(config, &store) else {
            return;
        };

        assert!(matches!(
            service.initial_provider(),
            Ok((_, KeySource::Environment))
        ));
    }

    #[test]
    fn stored_key_is_used_without_env() {
        let store = InMemoryCredentialStore::with_credentials(ProviderCredentials::Google {
            api_key: "from-store".to_string(),
        });
        let Some(service) = service(AppConfig::default(), &store) else {
            return;
        };

        assert!(matches!(
            service.initial_provider(),
            Ok((_, KeySource::Keyring))
        ));
    }

    #[test]
    fn save_api_key_persists_to_store() {
        let store = InMemoryCredentialStore::new();
        let Some(service) = service(AppConfig::default(), &store) else {
            return;
        };

        assert!(service.save_api_key("AIza-new".to_string()).is_ok());

        let saved = tokio_test::block_on(store.get());
        assert!(matches!(
            saved,
            Ok(Some(ProviderCredentials::Google { ref api_key })) if api_key == "AIza-new"
        ));
    }
}
