//! 后台翻译任务
//!
//! 主循环是同步的，翻译请求放到自有的 tokio 运行时中执行，
//! 完成后通过通道把 `(round, result)` 送回，由主循环转成 `AppMessage`。

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use translation_guess_core::PendingTranslation;
use translation_guess_core::services::run_translation;
use translation_guess_provider::{ProviderError, TranslationProvider};

/// 一次完成的翻译
#[derive(Debug)]
pub struct CompletedTranslation {
    pub round: u64,
    pub result: Result<String, ProviderError>,
}

/// 翻译任务执行器
pub struct TranslationService {
    runtime: Runtime,
    tx: UnboundedSender<CompletedTranslation>,
    rx: UnboundedReceiver<CompletedTranslation>,
}

impl TranslationService {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("translation-guess-worker")
            .enable_all()
            .build()?;
        let (tx, rx) = unbounded_channel();

        Ok(Self { runtime, tx, rx })
    }

    /// 在后台执行翻译，不等待结果
    pub fn spawn(&self, provider: Arc<dyn TranslationProvider>, pending: PendingTranslation) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = run_translation(provider.as_ref(), &pending).await;
            if let Err(e) = &result {
                tracing::debug!("Round {} failed: {e}", pending.round);
            }
            // 接收端只会在退出时关闭
            let _ = tx.send(CompletedTranslation {
                round: pending.round,
                result,
            });
        });
    }

    /// 取出所有已完成的翻译，不阻塞
    pub fn try_recv_all(&mut self) -> Vec<CompletedTranslation> {
        let mut completed = Vec::new();
        while let Ok(item) = self.rx.try_recv() {
            completed.push(item);
        }
        completed
    }

    /// 在运行时上同步执行一个 future（启动阶段和保存 Key 时使用）
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use translation_guess_core::LanguageCatalog;
    use translation_guess_provider::{
        GoogleTranslateProvider, ProviderMetadata, TranslateRequest, Translation,
    };

    use super::*;

    struct EchoProvider;

    #[async_trait]
    impl TranslationProvider for EchoProvider {
        fn id(&self) -> &'static str {
            "echo"
        }

        fn metadata() -> ProviderMetadata {
            GoogleTranslateProvider::metadata()
        }

        async fn translate(
            &self,
            request: &TranslateRequest,
        ) -> Result<Translation, ProviderError> {
            Ok(Translation {
                text: format!("{}:{}", request.target, request.text),
                target: request.target.clone(),
                detected_source_language: None,
            })
        }
    }

    #[test]
    fn spawned_translation_is_delivered() {
        let Ok(mut service) = TranslationService::new() else {
            return;
        };
        let Some(target) = LanguageCatalog::find("fr") else {
            return;
        };

        service.spawn(
            Arc::new(EchoProvider),
            PendingTranslation {
                round: 7,
                text: "Hello".to_string(),
                target,
            },
        );

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut completed = Vec::new();
        while completed.is_empty() && Instant::now() < deadline {
            completed = service.try_recv_all();
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].round, 7);
        assert_eq!(completed[0].result.as_deref().ok(), Some("fr:Hello"));
    }

    #[test]
    fn empty_channel_returns_nothing() {
        let Ok(mut service) = TranslationService::new() else {
            return;
        };
        assert!(service.try_recv_all().is_empty());
    }
}
