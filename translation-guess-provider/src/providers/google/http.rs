//! Google Translation HTTP 请求方法

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::types::{GoogleErrorBody, GoogleTranslation};
use super::{GoogleErrorResponse, GoogleTranslateBody, GoogleTranslateProvider, GoogleTranslateResponse};

impl GoogleTranslateProvider {
    /// 执行翻译 POST 请求
    ///
    /// API key 通过 `?key=` 查询参数传递，日志中会被遮盖。
    pub(crate) async fn post_translate(
        &self,
        body: &GoogleTranslateBody<'_>,
        ctx: ErrorContext,
    ) -> Result<GoogleTranslation> {
        let url = format!("{}?key={}", self.endpoint, self.api_key);

        let request = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(body);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        self.parse_translate_response(status, &response_text, ctx)
    }

    /// 解析翻译响应
    ///
    /// - 非 2xx：尽量解析 Google 错误体并映射，否则按未知错误处理
    /// - 2xx：取 `data.translations[0]`，缺少 `translatedText` 视为解析错误
    pub(crate) fn parse_translate_response(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<GoogleTranslation> {
        if !HttpUtils::is_success(status) {
            let raw = match serde_json::from_str::<GoogleErrorResponse>(response_text) {
                Ok(err) => Self::raw_error_from_body(err.error, status),
                Err(_) => RawApiError::with_code(
                    status.to_string(),
                    format!("HTTP {status}: {response_text}"),
                ),
            };
            log::error!("API 错误: {}", raw.message);
            return Err(self.map_error(raw, ctx));
        }

        let response: GoogleTranslateResponse =
            HttpUtils::parse_json(response_text, self.provider_name())?;

        let translation = response
            .data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| self.parse_error("响应中缺少 translations"))?;

        if translation.translated_text.is_none() {
            return Err(self.parse_error("响应中缺少 translatedText 字段"));
        }

        Ok(translation)
    }

    /// 从错误体提取错误码：优先 `errors[0].reason`，其次 `status`，最后 HTTP 状态码
    fn raw_error_from_body(body: GoogleErrorBody, http_status: u16) -> RawApiError {
        let code = body
            .first_reason()
            .map(str::to_string)
            .or_else(|| body.status.clone());

        match code {
            Some(code) => RawApiError::with_code(code, body.message),
            None if body.message.is_empty() => RawApiError::new(format!("HTTP {http_status}")),
            None => RawApiError::new(body.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    fn provider() -> GoogleTranslateProvider {
        GoogleTranslateProvider::new("test-key".to_string())
    }

    fn ctx() -> ErrorContext {
        ErrorContext {
            target: Some("es".to_string()),
        }
    }

    #[test]
    fn parses_first_translation() {
        let body = r#"{"data":{"translations":[{"translatedText":"Hola","detectedSourceLanguage":"en"}]}}"#;
        let result = provider().parse_translate_response(200, body, ctx());
        assert!(
            matches!(
                &result,
                Ok(GoogleTranslation { translated_text: Some(t), detected_source_language: Some(l) })
                    if t == "Hola" && l == "en"
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn ignores_extra_translations() {
        let body = r#"{"data":{"translations":[{"translatedText":"Bonjour"},{"translatedText":"Salut"}]}}"#;
        let result = provider().parse_translate_response(200, body, ctx());
        assert!(
            matches!(&result, Ok(t) if t.translated_text.as_deref() == Some("Bonjour")),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn empty_translations_is_parse_error() {
        let body = r#"{"data":{"translations":[]}}"#;
        let result = provider().parse_translate_response(200, body, ctx());
        assert!(matches!(result, Err(ProviderError::ParseError { .. })));
    }

    #[test]
    fn missing_translated_text_is_parse_error() {
        let body = r#"{"data":{"translations":[{"detectedSourceLanguage":"en"}]}}"#;
        let result = provider().parse_translate_response(200, body, ctx());
        assert!(matches!(result, Err(ProviderError::ParseError { .. })));
    }

    #[test]
    fn missing_data_is_parse_error() {
        let result = provider().parse_translate_response(200, r#"{"foo":1}"#, ctx());
        assert!(matches!(result, Err(ProviderError::ParseError { .. })));
    }

    #[test]
    fn non_json_success_body_is_parse_error() {
        let result = provider().parse_translate_response(200, "<html></html>", ctx());
        assert!(matches!(result, Err(ProviderError::ParseError { .. })));
    }

    #[test]
    fn invalid_key_error_body() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","errors":[{"message":"API key not valid. Please pass a valid API key.","domain":"global","reason":"badRequest"}],"status":"INVALID_ARGUMENT"}}"#;
        let result = provider().parse_translate_response(400, body, ctx());
        assert!(matches!(
            result,
            Err(ProviderError::InvalidCredentials { .. })
        ));
    }

    #[test]
    fn invalid_target_error_body() {
        let body = r#"{"error":{"code":400,"message":"Invalid Value","errors":[{"message":"Invalid Value","domain":"global","reason":"invalid"}]}}"#;
        let result = provider().parse_translate_response(400, body, ctx());
        assert!(matches!(
            result,
            Err(ProviderError::UnsupportedLanguage { language, .. }) if language == "es"
        ));
    }

    #[test]
    fn server_error_without_json_body() {
        let result = provider().parse_translate_response(503, "Service Unavailable", ctx());
        assert!(matches!(
            result,
            Err(ProviderError::Unknown { raw_code: Some(code), .. }) if code == "503"
        ));
    }

    #[test]
    fn error_body_without_reason_uses_status() {
        let body = r#"{"error":{"code":403,"message":"The caller does not have permission","status":"PERMISSION_DENIED"}}"#;
        let result = provider().parse_translate_response(403, body, ctx());
        assert!(matches!(result, Err(ProviderError::PermissionDenied { .. })));
    }
}
