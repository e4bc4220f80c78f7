//! 测试辅助模块
//!
//! 提供 mock Provider。

use std::sync::Mutex;

use async_trait::async_trait;
use translation_guess_provider::{
    ProviderError, ProviderMetadata, TranslateRequest, Translation, TranslationProvider,
};

use crate::services::MissingCredentialsProvider;

// ===== MockTranslationProvider =====

pub struct MockTranslationProvider {
    /// `Ok` 时返回该译文，`Err` 时返回网络错误
    reply: Result<String, String>,
    requests: Mutex<Vec<TranslateRequest>>,
}

impl MockTranslationProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err("connection refused".to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的请求
    pub fn requests(&self) -> Vec<TranslateRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TranslationProvider for MockTranslationProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn metadata() -> ProviderMetadata {
        MissingCredentialsProvider::metadata()
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<Translation, ProviderError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.reply {
            Ok(text) => Ok(Translation {
                text: text.clone(),
                target: request.target.clone(),
                detected_source_language: Some("en".to_string()),
            }),
            Err(detail) => Err(ProviderError::NetworkError {
                provider: self.id().to_string(),
                detail: detail.clone(),
            }),
        }
    }
}
