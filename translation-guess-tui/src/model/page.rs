//! 页面状态定义

use translation_guess_core::GameSession;

/// 页面枚举
///
/// 不单独存储：由会话是否已有译文推导出来。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 输入原文
    #[default]
    Input,
    /// 显示译文并猜测语言
    Result,
}

impl Page {
    /// 根据会话状态确定当前页面
    pub fn of(session: &GameSession) -> Self {
        if session.shows_result() {
            Page::Result
        } else {
            Page::Input
        }
    }

    /// 获取页面标题
    pub fn title(self) -> &'static str {
        match self {
            Page::Input => "Enter Text",
            Page::Result => "Guess the Language",
        }
    }
}
