//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 确认/提交
    Confirm,

    /// 输入字符
    Input(char),

    /// 粘贴文本
    Paste(String),

    /// 删除字符（Backspace）
    Backspace,

    /// 切换密码可见性
    ToggleSecrets,
}
