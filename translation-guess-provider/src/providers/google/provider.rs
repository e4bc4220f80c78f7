//! Google TranslationProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::normalize_language_code;
use crate::traits::{ErrorContext, TranslationProvider};
use crate::types::{
    FieldType, ProviderCredentialField, ProviderMetadata, ProviderType, TranslateRequest,
    Translation,
};

use super::{GOOGLE_TRANSLATE_ENDPOINT, GoogleTranslateBody, GoogleTranslateProvider};

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    fn id(&self) -> &'static str {
        "google"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Google,
            name: "Google Cloud Translation".to_string(),
            description: "Google Cloud Translation API (Basic, v2)".to_string(),
            endpoint: GOOGLE_TRANSLATE_ENDPOINT.to_string(),
            required_fields: vec![ProviderCredentialField {
                key: "apiKey".to_string(),
                label: "API Key".to_string(),
                field_type: FieldType::Password,
                env_var: Some("GOOGLE_TRANSLATE_API_KEY".to_string()),
                help_text: Some(
                    "Create a key in Google Cloud Console with the Cloud Translation API enabled"
                        .to_string(),
                ),
            }],
        }
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<Translation> {
        let target = normalize_language_code(&request.target);
        let body = GoogleTranslateBody {
            q: &request.text,
            target: &target,
        };
        let ctx = ErrorContext {
            target: Some(target.clone()),
        };

        let translation = self.post_translate(&body, ctx).await?;

        Ok(Translation {
            text: translation.translated_text.unwrap_or_default(),
            target,
            detected_source_language: translation.detected_source_language,
        })
    }
}
