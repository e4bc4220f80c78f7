//! Google Translation API 类型定义

use serde::{Deserialize, Serialize};

/// 翻译请求体
///
/// 与浏览器端调用一致，只携带 `q` 和 `target`。
#[derive(Debug, Serialize)]
pub struct GoogleTranslateBody<'a> {
    pub q: &'a str,
    pub target: &'a str,
}

/// 成功响应：`{ "data": { "translations": [ ... ] } }`
#[derive(Debug, Deserialize)]
pub struct GoogleTranslateResponse {
    pub data: GoogleTranslateData,
}

#[derive(Debug, Deserialize)]
pub struct GoogleTranslateData {
    #[serde(default)]
    pub translations: Vec<GoogleTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleTranslation {
    pub translated_text: Option<String>,
    pub detected_source_language: Option<String>,
}

/// 错误响应：`{ "error": { "code": 400, "message": "...", "status": "INVALID_ARGUMENT" } }`
#[derive(Debug, Deserialize)]
pub struct GoogleErrorResponse {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct GoogleErrorBody {
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
    pub errors: Option<Vec<GoogleErrorDetail>>,
}

#[derive(Debug, Deserialize)]
pub struct GoogleErrorDetail {
    pub reason: Option<String>,
}

impl GoogleErrorBody {
    /// 第一个 `errors[].reason`（如 `keyInvalid`、`dailyLimitExceeded`）
    pub fn first_reason(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.first())
            .and_then(|e| e.reason.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_skips_numeric_code() {
        let body = r#"{"error":{"code":429,"message":"Quota","errors":[{"reason":"rateLimitExceeded"}]}}"#;
        let parsed = serde_json::from_str::<GoogleErrorResponse>(body);
        assert!(parsed.is_ok());
        let Ok(parsed) = parsed else { return };
        assert_eq!(parsed.error.message, "Quota");
        assert_eq!(parsed.error.first_reason(), Some("rateLimitExceeded"));
        assert_eq!(parsed.error.status, None);
    }
}
