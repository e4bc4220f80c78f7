//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, oneshot};

use translation_guess_core::services::build_provider;
use translation_guess_core::types::ProviderCredentials;
use translation_guess_provider::{
    GoogleTranslateProvider, ProviderError, ProviderMetadata, TranslateRequest, Translation,
    TranslationProvider,
};

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 指向本地桩服务器的 Google Provider
pub fn google_at(endpoint: &str) -> Option<Arc<dyn TranslationProvider>> {
    build_provider(
        Some(ProviderCredentials::Google {
            api_key: "stub-key".to_string(),
        }),
        Some(endpoint),
    )
    .ok()
}

/// 单次应答的 HTTP 桩服务器，返回其 endpoint
///
/// `body` 为 `None` 时不应答直接关闭连接（模拟网络错误）。
pub async fn stub_server(status: u16, body: Option<&'static str>) -> Option<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await.ok()?;
    let addr = listener.local_addr().ok()?;

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        read_request(&mut socket).await;

        if let Some(body) = body {
            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
        let _ = socket.shutdown().await;
    });

    Some(format!("http://{addr}/language/translate/v2"))
}

/// 需要手动放行的 Provider，用于模拟迟到的响应
pub struct GatedProvider {
    gate: Mutex<Option<oneshot::Receiver<Result<String, ProviderError>>>>,
}

impl GatedProvider {
    /// 返回 Provider 和放行用的发送端
    pub fn new() -> (Arc<Self>, oneshot::Sender<Result<String, ProviderError>>) {
        let (tx, rx) = oneshot::channel();
        (
            Arc::new(Self {
                gate: Mutex::new(Some(rx)),
            }),
            tx,
        )
    }
}

#[async_trait]
impl TranslationProvider for GatedProvider {
    fn id(&self) -> &'static str {
        "gated"
    }

    fn metadata() -> ProviderMetadata {
        GoogleTranslateProvider::metadata()
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<Translation, ProviderError> {
        let network = |detail: &str| ProviderError::NetworkError {
            provider: "gated".to_string(),
            detail: detail.to_string(),
        };

        let Some(rx) = self.gate.lock().await.take() else {
            return Err(network("gate already used"));
        };
        let text = rx.await.map_err(|_| network("gate dropped"))??;

        Ok(Translation {
            text,
            target: request.target.clone(),
            detected_source_language: None,
        })
    }
}

/// 读取请求头和 `Content-Length` 指定长度的请求体
async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];

    while let Ok(n) = socket.read(&mut chunk).await {
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            break;
        }
    }
}
