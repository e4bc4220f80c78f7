//! 输入框消息

/// 当前输入框的编辑操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    /// 输入字符
    Char(char),
    /// 换行（仅原文输入框）
    Newline,
    /// 粘贴文本
    Paste(String),
    /// 删除字符（Backspace）
    Backspace,
    /// 提交：翻译原文或提交猜测
    Submit,
}
