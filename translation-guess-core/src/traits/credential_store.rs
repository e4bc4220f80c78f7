//! 凭证存储抽象 Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use translation_guess_provider::ProviderCredentials;

use crate::error::CoreResult;

/// 凭证存储 Trait
///
/// 游戏只需要一份翻译服务凭证，所以没有账户维度。
///
/// 平台实现:
/// - TUI: `KeyringCredentialStore` (keyring crate)
/// - 测试 / 无系统钥匙串环境: [`InMemoryCredentialStore`]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 读取凭证
    ///
    /// # Returns
    /// * `Ok(Some(credentials))` - 凭证存在
    /// * `Ok(None)` - 凭证不存在
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>>;

    /// 保存凭证（覆盖已有值）
    async fn set(&self, credentials: &ProviderCredentials) -> CoreResult<()>;
}

/// 内存凭证存储
///
/// 默认实现，所有平台可用。
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    credentials: Arc<RwLock<Option<ProviderCredentials>>>,
}

impl InMemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有凭证创建
    #[must_use]
    pub fn with_credentials(credentials: ProviderCredentials) -> Self {
        Self {
            credentials: Arc::new(RwLock::new(Some(credentials))),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>> {
        Ok(self.credentials.read().await.clone())
    }

    async fn set(&self, credentials: &ProviderCredentials) -> CoreResult<()> {
        *self.credentials.write().await = Some(credentials.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn google(key: &str) -> ProviderCredentials {
        ProviderCredentials::Google {
            api_key: key.to_string(),
        }
    }

    fn api_key(credentials: Option<ProviderCredentials>) -> Option<String> {
        credentials.map(|ProviderCredentials::Google { api_key }| api_key)
    }

    #[tokio::test]
    async fn empty_store_returns_none() {
        let store = InMemoryCredentialStore::new();
        assert!(matches!(store.get().await, Ok(None)));
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = InMemoryCredentialStore::new();
        assert!(store.set(&google("k1")).await.is_ok());
        assert!(store.set(&google("k2")).await.is_ok());
        assert_eq!(api_key(store.get().await.ok().flatten()), Some("k2".to_string()));
    }

    #[tokio::test]
    async fn seeded_store_returns_credentials() {
        let store = InMemoryCredentialStore::with_credentials(google("k1"));
        assert_eq!(api_key(store.get().await.ok().flatten()), Some("k1".to_string()));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryCredentialStore::new();
        let other = store.clone();
        assert!(store.set(&google("shared")).await.is_ok());
        assert_eq!(
            api_key(other.get().await.ok().flatten()),
            Some("shared".to_string())
        );
    }
}
