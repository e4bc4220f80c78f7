//! Update 层产出的副作用
//!
//! Update 只修改 Model；需要 Backend 做的事情以 Command 的形式交给主循环执行。

use translation_guess_core::PendingTranslation;

/// 需要主循环执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 在后台运行翻译请求
    Translate(PendingTranslation),
    /// 把 API Key 保存到钥匙串并切换 Provider
    SaveApiKey(String),
}
