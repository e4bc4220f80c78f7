//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use translation_guess_provider::{ProviderCredentials, TranslationProvider, create_provider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

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

/// 测试上下文 - 封装 Provider
pub struct TestContext {
    pub provider: Arc<dyn TranslationProvider>,
}

impl TestContext {
    /// 创建连接真实 Google API 的测试上下文
    pub fn google() -> Option<Self> {
        let api_key = env::var("GOOGLE_TRANSLATE_API_KEY").ok()?;
        let provider = create_provider(ProviderCredentials::Google { api_key }, None).ok()?;
        Some(Self { provider })
    }

    /// 创建指向本地桩服务器的测试上下文
    pub fn google_at(endpoint: &str, api_key: &str) -> Option<Self> {
        let provider = create_provider(
            ProviderCredentials::Google {
                api_key: api_key.to_string(),
            },
            Some(endpoint),
        )
        .ok()?;
        Some(Self { provider })
    }
}

/// 单次应答的 HTTP 桩服务器
///
/// 接受一个连接，读取完整请求后返回固定的状态码和响应体。
/// `JoinHandle` 产出收到的原始请求文本，便于断言请求内容。
pub struct StubServer {
    pub endpoint: String,
    pub request: JoinHandle<String>,
}

impl StubServer {
    pub async fn start(status: u16, body: &'static str) -> Option<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await.ok()?;
        let addr = listener.local_addr().ok()?;

        let request = tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return String::new();
            };

            let raw = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json; charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;

            raw
        });

        Some(Self {
            endpoint: format!("http://{addr}/language/translate/v2"),
            request,
        })
    }
}

/// 读取请求头和 `Content-Length` 指定长度的请求体
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let Ok(n) = socket.read(&mut chunk).await else {
            break;
        };
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
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

    String::from_utf8_lossy(&buf).into_owned()
}
