//! Google Cloud Translation (Basic, v2) Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{GoogleErrorResponse, GoogleTranslateBody, GoogleTranslateResponse};

pub(crate) const GOOGLE_TRANSLATE_ENDPOINT: &str =
    "https://translation.googleapis.com/language/translate/v2";

/// Google Cloud Translation Provider
pub struct GoogleTranslateProvider {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
}

impl GoogleTranslateProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: create_http_client(),
            api_key,
            endpoint: GOOGLE_TRANSLATE_ENDPOINT.to_string(),
        }
    }

    /// 替换 API 地址（自建代理、测试服务器）
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// 当前使用的 API 地址
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
