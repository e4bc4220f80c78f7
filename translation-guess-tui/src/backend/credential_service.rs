//! 凭证存储服务
//!
//! 使用系统钥匙串保存 Google Translate API Key
//! 实现 translation-guess-core 的 CredentialStore trait

use async_trait::async_trait;
use keyring::Entry;
use translation_guess_core::traits::CredentialStore;
use translation_guess_core::types::ProviderCredentials;
use translation_guess_core::{CoreError, CoreResult};

const SERVICE_NAME: &str = "translation-guess";
const API_KEY_USER: &str = "google-translate-api-key";

/// 基于系统钥匙串的凭证存储
///
/// 使用 keyring crate 将 API Key 存储到：
/// - Windows: Credential Manager
/// - macOS: Keychain
/// - Linux: Secret Service (GNOME Keyring / KWallet)
///
/// 钥匙串中只保存 Key 本身，不做序列化。
pub struct KeyringCredentialStore;

impl KeyringCredentialStore {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> CoreResult<Entry> {
        Entry::new(SERVICE_NAME, API_KEY_USER)
            .map_err(|e| CoreError::CredentialError(format!("Failed to create entry: {e}")))
    }

    /// 读取 Key（同步，可能阻塞）
    fn read_sync() -> CoreResult<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(key) if key.trim().is_empty() => Ok(None),
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CoreError::CredentialError(format!("Failed to load: {e}"))),
        }
    }

    fn write_sync(key: &str) -> CoreResult<()> {
        Self::entry()?
            .set_password(key)
            .map_err(|e| CoreError::CredentialError(format!("Failed to save: {e}")))
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 在阻塞线程池中执行钥匙串操作
async fn blocking<T: Send + 'static>(
    f: impl FnOnce() -> CoreResult<T> + Send + 'static,
) -> CoreResult<T> {
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CoreError::CredentialError(format!("Task join error: {e}")))?
}

#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>> {
        let key = blocking(Self::read_sync).await?;
        tracing::debug!("API key present in keyring: {}", key.is_some());
        Ok(key.map(|api_key| ProviderCredentials::Google { api_key }))
    }

    async fn set(&self, credentials: &ProviderCredentials) -> CoreResult<()> {
        let key = match credentials {
            ProviderCredentials::Google { api_key } => api_key.clone(),
        };
        blocking(move || Self::write_sync(&key)).await?;
        tracing::info!("API key saved to keyring");
        Ok(())
    }
}
