//! 配置加载服务
//!
//! 配置全部来自进程环境变量；API Key 缺失时由调用方回退到 [`CredentialStore`]。

use std::collections::HashMap;

use translation_guess_provider::ProviderCredentials;

use crate::error::{CoreError, CoreResult};
use crate::traits::CredentialStore;

/// Google Translate API Key
pub const API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";
/// 同样接受的 Key 变量名（与网页版的 `.env` 保持兼容）
pub const ALT_API_KEY_ENV: &str = "REACT_APP_GOOGLE_TRANSLATE_API_KEY";
/// 覆盖翻译服务地址
pub const ENDPOINT_ENV: &str = "TRANSLATION_GUESS_ENDPOINT";
/// 日志过滤器
pub const LOG_ENV: &str = "TRANSLATION_GUESS_LOG";
/// 默认日志过滤器
pub const DEFAULT_LOG_FILTER: &str = "info";

/// 应用配置
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 环境变量中的 API Key
    pub api_key: Option<String>,
    /// 翻译服务地址，`None` 使用 Provider 默认值
    pub endpoint: Option<String>,
    /// `EnvFilter` 语法的日志过滤器
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl AppConfig {
    /// 环境变量中配置的凭证
    pub fn credentials(&self) -> Option<ProviderCredentials> {
        self.api_key
            .clone()
            .map(|api_key| ProviderCredentials::Google { api_key })
    }

    /// 解析最终使用的凭证：环境变量优先，其次是凭证存储
    ///
    /// 存储读取失败只记日志，不会阻止游戏启动。
    pub async fn resolve_credentials(
        &self,
        store: &dyn CredentialStore,
    ) -> Option<ProviderCredentials> {
        if let Some(credentials) = self.credentials() {
            log::debug!("Using API key from environment");
            return Some(credentials);
        }

        match store.get().await {
            Ok(Some(credentials)) => {
                log::debug!("Using API key from credential store");
                Some(credentials)
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Failed to read credential store: {e}");
                None
            }
        }
    }
}

/// 配置服务 Trait
pub trait ConfigService: Send + Sync {
    fn load(&self) -> CoreResult<AppConfig>;
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// 从环境变量读取配置
pub struct EnvConfigService {
    lookup: EnvLookup,
}

impl EnvConfigService {
    /// 读取当前进程环境
    #[must_use]
    pub fn new() -> Self {
        Self {
            lookup: Box::new(|name| std::env::var(name).ok()),
        }
    }

    /// 从固定的键值对读取（测试用，不触碰进程环境）
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            lookup: Box::new(move |name| vars.get(name).cloned()),
        }
    }

    /// 读取变量，空白值视为未设置
    fn var(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl Default for EnvConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for EnvConfigService {
    fn load(&self) -> CoreResult<AppConfig> {
        let api_key = self.var(API_KEY_ENV).or_else(|| self.var(ALT_API_KEY_ENV));

        let endpoint = self.var(ENDPOINT_ENV);
        if let Some(endpoint) = &endpoint
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(CoreError::ConfigError(format!(
                "{ENDPOINT_ENV} must be an http(s) URL, got {endpoint:?}"
            )));
        }

        let log_filter = self
            .var(LOG_ENV)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(AppConfig {
            api_key,
            endpoint,
            log_filter,
        })
    }
}
