//! 应用主消息枚举

use translation_guess_provider::ProviderError;

use super::{InputMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 输入框相关消息（原文或猜测，取决于当前页面）
    Input(InputMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台翻译完成
    TranslationFinished {
        round: u64,
        result: Result<String, ProviderError>,
    },

    /// 重新开始（只有出现反馈后才生效）
    Restart,

    /// 显示帮助
    ShowHelp,

    /// 打开 API Key 设置弹窗
    ShowApiKey,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
