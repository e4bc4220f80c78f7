//! 游戏控制器

use std::sync::Arc;

use translation_guess_provider::{ProviderError, TranslationProvider};

use crate::error::CoreResult;
use crate::types::{GameSession, GuessFeedback, PendingTranslation};

/// 执行一次待处理的翻译请求，只返回译文
///
/// 不持有会话，可以放进独立的 tokio task 中运行。
pub async fn run_translation(
    provider: &dyn TranslationProvider,
    pending: &PendingTranslation,
) -> Result<String, ProviderError> {
    let translation = provider.translate(&pending.request()).await?;
    log::debug!(
        "Round {} translated into {} (detected source: {:?})",
        pending.round,
        translation.target,
        translation.detected_source_language
    );
    Ok(translation.text)
}

/// Translation Guess 游戏控制器
///
/// 独占会话状态，并持有翻译 Provider。
pub struct TranslationGuessGame {
    session: GameSession,
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationGuessGame {
    #[must_use]
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            session: GameSession::new(),
            provider,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// 当前 Provider（供后台任务持有）
    pub fn provider(&self) -> Arc<dyn TranslationProvider> {
        Arc::clone(&self.provider)
    }

    /// 替换 Provider，进行中的请求仍使用旧 Provider 完成
    pub fn set_provider(&mut self, provider: Arc<dyn TranslationProvider>) {
        self.provider = provider;
    }

    pub fn input_text_mut(&mut self) -> &mut String {
        self.session.input_text_mut()
    }

    pub fn user_guess_mut(&mut self) -> &mut String {
        self.session.user_guess_mut()
    }

    /// 开始翻译当前输入，目标语言随机选取
    ///
    /// 请求进行中时返回 `None`。
    pub fn begin_translation(&mut self) -> Option<PendingTranslation> {
        self.session.begin_translation(&mut rand::rng())
    }

    /// 回填翻译结果，过期轮次的结果会被丢弃
    pub fn complete_translation(
        &mut self,
        round: u64,
        result: Result<String, ProviderError>,
    ) -> bool {
        self.session.complete_translation(round, result)
    }

    /// 翻译 `text` 并等待结果
    ///
    /// 请求进行中时不做任何事并返回 `false`。
    pub async fn submit_translation(&mut self, text: impl Into<String>) -> bool {
        if self.session.is_loading() {
            log::debug!("Submit ignored, translation in flight");
            return false;
        }

        self.session.set_input_text(text);
        let Some(pending) = self.begin_translation() else {
            return false;
        };
        let result = run_translation(self.provider.as_ref(), &pending).await;
        self.complete_translation(pending.round, result)
    }

    /// 提交猜测，每轮只能提交一次
    pub fn submit_guess(&mut self, guess: impl Into<String>) -> CoreResult<GuessFeedback> {
        self.session.submit_guess(guess).cloned()
    }

    pub fn restart(&mut self) {
        log::debug!("Restarting game (round {})", self.session.round());
        self.session.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, TRANSLATION_FAILED_MESSAGE};
    use crate::test_utils::MockTranslationProvider;
    use crate::types::{CORRECT_GUESS_MESSAGE, LanguageCatalog, Phase};

    fn game_with(provider: &Arc<MockTranslationProvider>) -> TranslationGuessGame {
        TranslationGuessGame::new(provider.clone())
    }

    #[tokio::test]
    async fn submit_translation_success() {
        let provider = Arc::new(MockTranslationProvider::replying("Hola"));
        let mut game = game_with(&provider);

        assert!(game.submit_translation("Hello").await);

        let session = game.session();
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.translated_text(), "Hola");
        assert_eq!(session.input_text(), "Hello");

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "Hello");
        assert!(LanguageCatalog::find(&requests[0].target).is_some());
        assert_eq!(
            session.target().map(|t| t.code),
            Some(requests[0].target.as_str())
        );
    }

    #[tokio::test]
    async fn empty_text_is_sent_as_is() {
        let provider = Arc::new(MockTranslationProvider::replying(""));
        let mut game = game_with(&provider);

        assert!(game.submit_translation("").await);
        assert_eq!(provider.requests()[0].text, "");
        assert_eq!(game.session().phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn submit_translation_failure() {
        let provider = Arc::new(MockTranslationProvider::failing());
        let mut game = game_with(&provider);

        assert!(game.submit_translation("Hello").await);

        let session = game.session();
        assert_eq!(session.phase(), Phase::Failed);
        assert_eq!(session.error_message(), Some(TRANSLATION_FAILED_MESSAGE));
        assert_eq!(session.translated_text(), "");
        assert_eq!(session.input_text(), "Hello");
    }

    #[tokio::test]
    async fn submit_is_inert_while_loading() {
        let provider = Arc::new(MockTranslationProvider::replying("Hola"));
        let mut game = game_with(&provider);

        game.input_text_mut().push_str("Hello");
        let pending = game.begin_translation();
        assert!(pending.is_some());

        assert!(!game.submit_translation("Other").await);
        assert!(game.begin_translation().is_none());
        assert!(provider.requests().is_empty());
        assert_eq!(game.session().input_text(), "Hello");
    }

    #[tokio::test]
    async fn guess_after_translation() {
        let provider = Arc::new(MockTranslationProvider::replying("Hola"));
        let mut game = game_with(&provider);
        game.submit_translation("Hello").await;

        let name = game.session().target().map(|t| t.name).unwrap_or_default();
        let feedback = game.submit_guess(name.to_uppercase());
        assert!(matches!(
            feedback,
            Ok(GuessFeedback { is_correct: true, ref message }) if message == CORRECT_GUESS_MESSAGE
        ));
        assert!(matches!(
            game.submit_guess(name),
            Err(CoreError::GuessNotAllowed)
        ));
    }

    #[tokio::test]
    async fn restart_after_answer() {
        let provider = Arc::new(MockTranslationProvider::replying("Hola"));
        let mut game = game_with(&provider);
        game.submit_translation("Hello").await;
        game.submit_guess("nope").ok();

        game.restart();
        assert_eq!(game.session().phase(), Phase::Idle);
        assert_eq!(game.session().input_text(), "");
    }

    #[tokio::test]
    async fn provider_swap_keeps_session() {
        let first = Arc::new(MockTranslationProvider::failing());
        let second = Arc::new(MockTranslationProvider::replying("Bonjour"));
        let mut game = game_with(&first);
        game.submit_translation("Hello").await;

        game.set_provider(second.clone());
        assert_eq!(game.session().phase(), Phase::Failed);

        game.submit_translation("Hello").await;
        assert_eq!(game.session().translated_text(), "Bonjour");
        assert_eq!(first.requests().len(), 1);
        assert_eq!(second.requests().len(), 1);
    }
}
